use std::sync::Arc;

use userdesk::{
    Controller, InMemoryRemote, UiOptions, User, UserField, UserId,
    app::{FETCH_ERROR, Request, SaveOp, ScrollMetrics},
    remote::{RemoteCall, RemoteOp},
};

fn near_bottom(len: usize) -> ScrollMetrics {
    ScrollMetrics {
        content_height: len,
        viewport_height: len,
        offset: 0,
    }
}

fn ids(controller: &Controller) -> Vec<String> {
    controller
        .state()
        .users()
        .iter()
        .map(User::id_label)
        .collect()
}

async fn scroll_to_end(controller: &mut Controller) {
    let len = controller.state().users().len();
    let request = controller
        .on_scroll(near_bottom(len))
        .expect("scroll near the end requests a page");
    controller.perform(request).await;
}

#[tokio::test]
async fn full_session_against_offline_collection() {
    let remote = Arc::new(InMemoryRemote::seeded(20));
    let mut controller = Controller::new(remote.clone(), &UiOptions::default());

    let request = controller.startup().unwrap();
    controller.perform(request).await;
    assert_eq!(controller.state().users().len(), 10);
    assert_eq!(controller.state().page(), 1);

    scroll_to_end(&mut controller).await;
    assert_eq!(controller.state().users().len(), 20);
    assert_eq!(controller.state().page(), 2);
    assert_eq!(ids(&controller), (1..=20).map(|id| id.to_string()).collect::<Vec<_>>());

    controller.change_field(UserField::FirstName, "New".into());
    controller.change_field(UserField::LastName, "Person".into());
    controller.change_field(UserField::Email, "new@x.io".into());
    controller.change_field(UserField::Department, "Ops".into());
    let request = controller.submit().unwrap();
    assert!(matches!(
        request,
        Request::Save {
            op: SaveOp::Create,
            ..
        }
    ));
    controller.perform(request).await;
    assert_eq!(controller.state().users().len(), 21);
    let created = controller.state().users()[20].clone();
    assert_eq!(created.id, Some(UserId::from(21)));
    assert_eq!(controller.state().form().user(), &User::default());
    assert!(!controller.state().is_editing());

    controller.edit(created.clone());
    controller.change_field(UserField::Department, "Sales".into());
    let request = controller.submit().unwrap();
    controller.perform(request).await;
    assert_eq!(controller.state().users().len(), 21);
    assert_eq!(controller.state().users()[20].department, "Sales");
    assert!(!controller.state().is_editing());

    let request = controller.delete(UserId::from(5));
    controller.perform(request).await;
    assert_eq!(controller.state().users().len(), 20);
    assert!(!ids(&controller).contains(&"5".to_string()));

    assert_eq!(controller.state().error(), None);
    assert_eq!(
        remote.calls(),
        vec![
            RemoteCall::ListPage { page: 1, limit: 10 },
            RemoteCall::ListPage { page: 2, limit: 10 },
            RemoteCall::Create,
            RemoteCall::Update {
                id: UserId::from(21)
            },
            RemoteCall::Delete {
                id: UserId::from(5)
            },
        ]
    );
}

#[tokio::test]
async fn empty_pages_still_advance_the_page_counter() {
    let users = vec![
        User::new("A", "One", "a@x.io", "Eng").with_id(1),
        User::new("B", "Two", "b@x.io", "Eng").with_id(2),
    ];
    let remote = Arc::new(InMemoryRemote::new(users));
    let options = UiOptions::default().with_page_size(2);
    let mut controller = Controller::new(remote, &options);

    let request = controller.startup().unwrap();
    controller.perform(request).await;
    scroll_to_end(&mut controller).await;
    scroll_to_end(&mut controller).await;

    assert_eq!(controller.state().page(), 3);
    assert_eq!(ids(&controller), vec!["1", "2"]);
}

#[tokio::test]
async fn failed_page_keeps_collection_and_allows_retry_by_scrolling() {
    let remote = Arc::new(InMemoryRemote::seeded(30));
    let mut controller = Controller::new(remote.clone(), &UiOptions::default());

    let request = controller.startup().unwrap();
    controller.perform(request).await;

    remote.fail_next(RemoteOp::ListPage);
    scroll_to_end(&mut controller).await;
    assert_eq!(controller.state().error(), Some(FETCH_ERROR));
    assert_eq!(controller.state().users().len(), 10);
    assert!(!controller.state().is_loading());

    scroll_to_end(&mut controller).await;
    assert_eq!(controller.state().page(), 3);
    assert_eq!(controller.state().users().len(), 20);
    assert_eq!(controller.state().users()[10].id, Some(UserId::from(21)));
    assert_eq!(controller.state().error(), Some(FETCH_ERROR));
}
