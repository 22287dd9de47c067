use userdir_types::*;

pub fn format_marital(is_married: bool) -> &'static str {
    if is_married {
        "married"
    } else {
        "single"
    }
}

pub fn format_user(user: &User) -> String {
    format!(
        "#{} {} ({}, {})",
        user.id,
        user.name,
        user.age,
        format_marital(user.is_married)
    )
}

pub fn format_users(users: &[User]) -> String {
    if users.is_empty() {
        return "No users".to_string();
    }

    let id_width = users.iter().map(|u| u.id.chars().count()).max().unwrap_or(0).max(2);
    let name_width = users
        .iter()
        .map(|u| u.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut lines = vec![format!(
        "{:<id_width$}  {:<name_width$}  {:>3}  STATUS",
        "ID",
        "NAME",
        "AGE",
        id_width = id_width,
        name_width = name_width
    )];
    for user in users {
        lines.push(format!(
            "{:<id_width$}  {:<name_width$}  {:>3}  {}",
            user.id,
            user.name,
            user.age,
            format_marital(user.is_married),
            id_width = id_width,
            name_width = name_width
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "{} user{}",
        users.len(),
        if users.len() == 1 { "" } else { "s" }
    ));

    lines.join("\n")
}

pub fn format_stats(stats: &UserStats) -> String {
    [
        format!("Total:        {}", stats.total),
        format!("Shown:        {}", stats.shown),
        format!("Average age:  {}", stats.average_age),
        format!("Married:      {} ({}%)", stats.married, stats.married_percentage),
        format!("Single:       {} ({}%)", stats.single, stats.single_percentage),
        String::new(),
        "Age groups:".to_string(),
        format!("  young (18-30):  {}", stats.young),
        format!("  adult (31-50):  {}", stats.adult),
        format!("  senior (51+):   {}", stats.senior),
    ]
    .join("\n")
}
