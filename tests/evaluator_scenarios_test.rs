//! Visibility and permission scenarios over the reference dataset

mod helpers;

use helpers::*;
use ParishHub::data::seed;
use ParishHub::models::{EventId, GroupId, Role, UserId};
use ParishHub::services::{
    can_manage_group, can_post, effective_display_role, group_children, is_event_visible,
    member_groups, visible_events, visible_messages,
};
use ParishHub::Snapshot;

fn snapshot() -> Snapshot {
    seed::snapshot(test_now()).expect("seed data is valid")
}

#[test]
fn test_standard_user_event_visibility() {
    let snapshot = snapshot();
    let u3 = snapshot.find_user(&UserId::new("u3")).unwrap();
    assert_eq!(u3.groups, vec![GroupId::new("g1"), GroupId::new("g4")]);

    let event = |id: &str| snapshot.find_event(&EventId::new(id)).unwrap();
    assert!(is_event_visible(u3, event("e2")));
    assert!(!is_event_visible(u3, event("e3")));
    assert!(is_event_visible(u3, event("e1")));

    let visible: Vec<&str> =
        visible_events(u3, snapshot.events()).iter().map(|e| e.id.as_str()).collect();
    assert_eq!(visible, vec!["e1", "e2", "e4"]);
}

#[test]
fn test_general_admin_sees_every_event() {
    let snapshot = snapshot();
    let u1 = snapshot.find_user(&UserId::new("u1")).unwrap();
    assert_eq!(visible_events(u1, snapshot.events()).len(), snapshot.events().len());
}

#[test]
fn test_choir_posting_rights() {
    let snapshot = snapshot();
    let g2 = snapshot.find_group(&GroupId::new("g2")).unwrap();
    let u4 = snapshot.find_user(&UserId::new("u4")).unwrap();
    let u6 = snapshot.find_user(&UserId::new("u6")).unwrap();

    assert!(!g2.can_members_post);
    assert!(!can_post(u4, Some(g2)));
    assert!(can_post(u6, Some(g2)));
}

#[test]
fn test_youth_group_open_to_members() {
    let snapshot = snapshot();
    let g1 = snapshot.find_group(&GroupId::new("g1")).unwrap();
    let u3 = snapshot.find_user(&UserId::new("u3")).unwrap();
    assert!(can_post(u3, Some(g1)));
    assert!(!can_post(u3, None));
}

#[test]
fn test_group_admin_role_does_not_grant_management_elsewhere() {
    let snapshot = snapshot();
    let u2 = snapshot.find_user(&UserId::new("u2")).unwrap();
    let g1 = snapshot.find_group(&GroupId::new("g1")).unwrap();
    let g2 = snapshot.find_group(&GroupId::new("g2")).unwrap();

    assert!(can_manage_group(u2, g1));
    assert!(!can_manage_group(u2, g2));
    // Posting only checks the global role
    assert!(can_post(u2, Some(g2)));
}

#[test]
fn test_standard_user_listed_as_admin_displays_as_group_admin() {
    let user = TestUser::new("u9", Role::UserStandard).build();
    let group = TestGroup::new("g9").with_members(&["u9"]).with_admins(&["u9"]).build();
    assert_eq!(effective_display_role(&user, &group), Role::AdminGroup);
    assert!(can_manage_group(&user, &group));
    assert!(can_post(&user, Some(&group)));
}

#[test]
fn test_forest_roots_and_children() {
    let snapshot = snapshot();
    let roots: Vec<&str> =
        group_children(snapshot.groups(), None).iter().map(|g| g.id.as_str()).collect();
    assert_eq!(roots, vec!["g1", "g2", "g4", "g5"]);

    let g1 = GroupId::new("g1");
    let children: Vec<&str> =
        group_children(snapshot.groups(), Some(&g1)).iter().map(|g| g.id.as_str()).collect();
    assert_eq!(children, vec!["g3"]);
}

#[test]
fn test_choir_thread_is_readable_by_non_members() {
    let snapshot = snapshot();
    let g2 = snapshot.find_group(&GroupId::new("g2")).unwrap();
    let thread: Vec<&str> =
        visible_messages(g2, snapshot.messages()).iter().map(|m| m.id.as_str()).collect();
    assert_eq!(thread, vec!["m4", "m5"]);

    let u3 = snapshot.find_user(&UserId::new("u3")).unwrap();
    let mine: Vec<&str> =
        member_groups(u3, snapshot.groups()).iter().map(|g| g.id.as_str()).collect();
    assert!(!mine.contains(&"g2"));
}
