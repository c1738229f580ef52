use minichat_core::models::user_profile::UserSummary;

/// Everyone in the directory except `current_user_id`.
pub fn selectable_users(users: Vec<UserSummary>, current_user_id: &str) -> Vec<UserSummary> {
    users
        .into_iter()
        .filter(|u| u.user_id != current_user_id)
        .collect()
}

/// Resolve a picker choice: a 1-based position in `users`, or a user ID.
pub fn resolve<'a>(users: &'a [UserSummary], choice: &str) -> Option<&'a UserSummary> {
    let choice = choice.trim();
    let by_position = choice
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| users.get(i));

    by_position.or_else(|| users.iter().find(|u| u.user_id == choice))
}
