use verseslides::session::{Action, View};
use verseslides::{paginate, Deck, Error, Session, SessionConfig, Slide, SlideTemplate, StaticVerseSource, Testament, VerseRecord};

fn slides(count: u32) -> Vec<Slide> {
    let template = SlideTemplate {
        book: "Acts".into(),
        chapter: 2,
        translation: "kjv".into(),
    };
    let verses: Vec<VerseRecord> = (1..=count * 5)
        .map(|n| VerseRecord::new(n, format!("verse {}", n)))
        .collect();
    paginate(&verses, &template)
}

#[test]
fn walk_forward_and_back() {
    let mut deck = Deck::new();
    assert!(!deck.next());
    assert!(!deck.prev());

    deck.append(slides(3));
    assert_eq!(deck.cursor(), Some(0));
    assert!(!deck.can_go_prev());

    assert!(deck.next());
    assert!(deck.next());
    assert!(!deck.next(), "stops at the last slide");
    assert_eq!(deck.cursor(), Some(2));
    assert_eq!(deck.position().unwrap().caption(), "Slide 3 of 3");

    assert!(deck.prev());
    assert!(deck.prev());
    assert!(!deck.prev(), "stops at the first slide");
    assert_eq!(deck.cursor(), Some(0));
}

#[test]
fn append_jumps_to_first_new_slide() {
    let mut deck = Deck::new();
    assert_eq!(deck.append(slides(2)), Some(0));
    deck.next();
    assert_eq!(deck.append(slides(3)), Some(2));
    assert_eq!(deck.len(), 5);
    assert_eq!(deck.cursor(), Some(2));
    assert_eq!(deck.append(Vec::new()), None);
    assert_eq!(deck.cursor(), Some(2));
}

#[test]
fn out_of_range_is_rejected_without_side_effects() {
    let mut deck = Deck::new();
    deck.append(slides(2));
    deck.next();

    assert!(matches!(deck.go_to(2), Err(Error::IndexOutOfRange { index: 2, len: 2 })));
    assert!(matches!(deck.remove_at(5), Err(Error::IndexOutOfRange { .. })));
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.cursor(), Some(1));
}

#[test]
fn removing_clamps_cursor_and_empties_deck() {
    let mut deck = Deck::new();
    deck.append(slides(3));
    deck.go_to(2).unwrap();

    deck.remove_at(2).unwrap();
    assert_eq!(deck.cursor(), Some(1));

    deck.remove_at(0).unwrap();
    assert_eq!(deck.cursor(), Some(0));

    deck.remove_at(0).unwrap();
    assert!(deck.is_empty());
    assert_eq!(deck.cursor(), None);
    assert!(deck.current().is_none());
}

#[test]
fn session_actions_drive_deck_and_view() {
    let source = StaticVerseSource::numbered(12);
    let mut session = Session::new(&SessionConfig::default());
    session.apply(Action::SetTestament(Testament::Old)).unwrap();
    session.apply(Action::SetBook("Numbers".into())).unwrap();
    session.apply(Action::SetChapter("6".into())).unwrap();
    session.apply(Action::SetFromVerse("1".into())).unwrap();
    session.apply(Action::SetToVerse("12".into())).unwrap();
    assert_eq!(session.add_slides(&source).unwrap(), 3);

    session.apply(Action::ShowList).unwrap();
    assert_eq!(session.view(), View::List);
    session.apply(Action::GoToSlide(2)).unwrap();
    assert_eq!(session.view(), View::Slide);
    assert_eq!(session.position().unwrap().number, 3);

    session.apply(Action::Prev).unwrap();
    session.apply(Action::Next).unwrap();
    session.apply(Action::Next).unwrap();
    assert_eq!(session.deck().cursor(), Some(2));

    assert!(session.apply(Action::RemoveSlide(9)).is_err());
    session.apply(Action::RemoveSlide(0)).unwrap();
    assert_eq!(session.deck().len(), 2);
    assert_eq!(session.deck().cursor(), Some(1));
    assert_eq!(session.current_slide().unwrap().reference(), "Numbers 6:11-12");
}
