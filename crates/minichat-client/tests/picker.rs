mod common;

use minichat_client::views::picker::{resolve, selectable_users};

use common::summary;

#[test]
fn current_user_is_excluded() {
    let users = selectable_users(vec![summary("a"), summary("me"), summary("b")], "me");
    let ids: Vec<&str> = users.iter().map(|u| u.user_id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn choice_by_position_or_id() {
    let users = vec![summary("a"), summary("b")];

    assert_eq!(resolve(&users, "1").unwrap().user_id, "a");
    assert_eq!(resolve(&users, " 2 ").unwrap().user_id, "b");
    assert_eq!(resolve(&users, "b").unwrap().user_id, "b");
    assert!(resolve(&users, "0").is_none());
    assert!(resolve(&users, "3").is_none());
    assert!(resolve(&users, "c").is_none());
}
