use quadrant_core::{
    map, quadrant_to_xy, xy_to_quadrant, ControllerError, ControllerState, GridConfig,
    LocationAxis, MethodAxis, ProjectFields, Quadrant, Session, ValidationError,
};

fn session() -> Session {
    let config = GridConfig {
        jitter: 0.15,
        ..GridConfig::default()
    };
    Session::with_seed(config, 2024)
}

#[test]
fn alpha_lands_in_onshore_manual_quadrant() {
    let mut session = session();

    session
        .add(ProjectFields::new(
            "Alpha",
            MethodAxis::Manual,
            LocationAxis::Onshore,
        ))
        .unwrap();

    let projects = session.projects();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].method.category(), 0);
    assert_eq!(projects[0].location.category(), 1);

    let (x, y) = map(&projects[0]);
    assert!((0.1..=0.4).contains(&x), "x = {}", x);
    assert!((0.6..=0.9).contains(&y), "y = {}", y);
}

#[test]
fn empty_name_is_rejected_without_changes() {
    let mut session = session();

    let err = session
        .add(ProjectFields::new("", MethodAxis::Manual, LocationAxis::Offshore))
        .unwrap_err();

    assert_eq!(err, ControllerError::Validation(ValidationError::EmptyName));
    assert!(session.projects().is_empty());
    assert_eq!(session.state(), ControllerState::AddPending);
}

#[test]
fn deleting_first_of_two_shifts_second_down() {
    let mut session = session();
    session
        .add(ProjectFields::in_quadrant("First", Quadrant::OffshoreAi))
        .unwrap();
    session
        .add(ProjectFields::in_quadrant("Second", Quadrant::OnshoreAi))
        .unwrap();
    let second_id = session.projects()[1].id;

    session.render();
    session.select_point(0).unwrap();
    let removed = session.delete_selected().unwrap();

    assert_eq!(removed.name, "First");
    assert_eq!(session.projects().len(), 1);
    assert_eq!(session.projects()[0].id, second_id);
}

#[test]
fn click_edit_cycle_through_render() {
    let mut session = session();
    for name in ["A", "B", "C"] {
        session
            .add(ProjectFields::in_quadrant(name, Quadrant::OffshoreManual))
            .unwrap();
    }

    let frame = session.render();
    let jitter_before = {
        let p = &session.projects()[1];
        (p.jitter_x, p.jitter_y)
    };
    let target = frame.point(1).unwrap();
    let picked = quadrant_core::pick_point(&frame, target.x, target.y, 0.001).unwrap();
    assert_eq!(picked, 1);

    let selected = session.select_point(picked).unwrap().clone();
    assert_eq!(selected.name, "B");
    assert_eq!(session.selected().map(|p| p.id), Some(selected.id));

    let mut fields = selected.fields();
    fields.name = "B (moved)".into();
    fields.method = MethodAxis::AiAssisted;
    session.save_edit(fields).unwrap();

    let edited = &session.projects()[1];
    assert_eq!(edited.name, "B (moved)");
    assert_eq!(edited.quadrant(), Quadrant::OffshoreAi);
    assert_eq!((edited.jitter_x, edited.jitter_y), jitter_before);

    // The edit invalidated the frame the click came from
    assert!(session.select_point(picked).is_err());
    assert_eq!(session.state(), ControllerState::Idle);
}

#[test]
fn quadrant_names_round_trip() {
    for quadrant in Quadrant::ALL {
        let (x, y) = quadrant_to_xy(quadrant.key());
        assert_eq!(xy_to_quadrant(x, y), quadrant);
    }
    assert_eq!(quadrant_to_xy("somewhere else"), (0, 0));
}
