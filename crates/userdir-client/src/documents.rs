pub const GET_USERS: &str = r#"
  query GetUsers {
    getUsers {
      id
      name
      age
      isMarried
    }
  }
"#;

pub const GET_USER_BY_ID: &str = r#"
  query GetUserById($id: ID!) {
    getUserById(id: $id) {
      id
      name
      age
      isMarried
    }
  }
"#;

pub const SEARCH_USERS: &str = r#"
  query SearchUsers($searchTerm: String!) {
    searchUsers(searchTerm: $searchTerm) {
      id
      name
      age
      isMarried
    }
  }
"#;

pub const FILTER_USERS: &str = r#"
  query FilterUsers($input: FilterUsersInput!) {
    filterUsers(input: $input) {
      id
      name
      age
      isMarried
    }
  }
"#;

pub const CREATE_USER: &str = r#"
  mutation CreateUser($name: String!, $age: Int!, $isMarried: Boolean!) {
    createUser(name: $name, age: $age, isMarried: $isMarried) {
      id
      name
      age
      isMarried
    }
  }
"#;

pub const DELETE_USER_BY_ID: &str = r#"
  mutation DeleteUserById($id: ID!) {
    deleteUserById(id: $id) {
      id
      name
      age
      isMarried
    }
  }
"#;

pub const EDIT_USER_BY_ID: &str = r#"
  mutation EditUserById($input: UpdateUserInput!) {
    editUserById(input: $input) {
      id
      name
      age
      isMarried
    }
  }
"#;
