//! Order wizard flow tests
//!
//! These tests drive the sequencer and the order holder together the way the
//! terminal front end does.
//!
//! Test coverage:
//! - Start -> Entree -> Side dish -> Accompaniment -> Checkout with no skips
//! - Cancel from every screen returns to Start with an empty order
//! - Back navigation keeps earlier selections
//! - Worked pricing example (5.00 + 2.50 at 8%)

use std::io::Cursor;

use lunch_tray::{
    Action, Catalog, LunchTrayApp, MenuItem, NavigationAction, NavigationError, OrderStateHolder,
    Screen, ScreenSequencer, TAX_RATE,
};
use rust_decimal::Decimal;

fn app() -> LunchTrayApp {
    LunchTrayApp::new(Catalog::builtin(), TAX_RATE, "$")
}

fn go(app: &mut LunchTrayApp, action: NavigationAction) {
    app.dispatch(Action::Navigate(action)).unwrap();
}

#[test]
fn test_forward_path_reaches_checkout_through_every_screen() {
    let mut sequencer = ScreenSequencer::new();
    let mut visited = vec![sequencer.current()];
    for action in [
        NavigationAction::StartOrder,
        NavigationAction::Next,
        NavigationAction::Next,
        NavigationAction::Next,
    ] {
        visited.push(sequencer.handle(action).unwrap().to);
    }
    assert_eq!(visited, Screen::ALL.to_vec());
}

#[test]
fn test_cancel_from_any_screen_resets_everything() {
    for screens_forward in 0..4 {
        let mut app = app();
        go(&mut app, NavigationAction::StartOrder);
        app.dispatch(Action::Select(1)).unwrap();
        for _ in 0..screens_forward {
            go(&mut app, NavigationAction::Next);
            if app.current_screen() != Screen::Checkout {
                app.dispatch(Action::Select(0)).unwrap();
            }
        }
        assert!(!app.order().current_state().is_empty());

        go(&mut app, NavigationAction::Cancel);
        assert_eq!(app.current_screen(), Screen::Start);
        assert!(!app.sequencer().can_navigate_back());

        let state = app.order().current_state();
        assert!(state.is_empty());
        assert_eq!(state.item_total_price, Decimal::ZERO);
        assert_eq!(state.tax_price, Decimal::ZERO);
        assert_eq!(state.order_total_price, Decimal::ZERO);
    }
}

#[test]
fn test_back_from_side_dish_keeps_entree() {
    let mut app = app();
    go(&mut app, NavigationAction::StartOrder);
    app.dispatch(Action::Select(1)).unwrap(); // Three Bean Chili
    go(&mut app, NavigationAction::Next);
    app.dispatch(Action::Select(3)).unwrap(); // Coconut Rice

    go(&mut app, NavigationAction::Back);
    assert_eq!(app.current_screen(), Screen::Entree);

    let state = app.order().current_state();
    assert_eq!(state.entree.as_ref().unwrap().name, "Three Bean Chili");
    assert_eq!(state.side_dish.as_ref().unwrap().name, "Coconut Rice");
    assert_eq!(state.item_total_price, Decimal::new(550, 2));
}

#[test]
fn test_back_from_start_is_a_contract_violation() {
    let mut app = app();
    let err = app
        .dispatch(Action::Navigate(NavigationAction::Back))
        .unwrap_err();
    assert!(err.to_string().contains("no previous screen"));
    assert_eq!(app.current_screen(), Screen::Start);
}

#[test]
fn test_unknown_screen_name() {
    let err = "DESSERT".parse::<Screen>().unwrap_err();
    assert_eq!(err, NavigationError::UnknownScreen { name: "DESSERT".to_string() });
}

#[test]
fn test_worked_pricing_example() {
    let mut holder = OrderStateHolder::new();
    holder.update_entree(MenuItem::new("Entree", "", Decimal::new(500, 2), "entree"));
    holder.update_side_dish(MenuItem::new("Side", "", Decimal::new(250, 2), "side"));

    let state = holder.current_state();
    assert_eq!(state.item_total_price, Decimal::new(750, 2));
    assert_eq!(state.tax_price, Decimal::new(60, 2));
    assert_eq!(state.order_total_price, Decimal::new(810, 2));

    let summary = holder.checkout_summary("$");
    assert_eq!(
        (summary.subtotal.as_str(), summary.tax.as_str(), summary.total.as_str()),
        ("$7.50", "$0.60", "$8.10")
    );
}

#[test]
fn test_interactive_session_places_an_order() {
    let mut app = app();
    let input = Cursor::new("s\n3\nn\n1\nn\n2\nn\ns\nq\n");
    let mut output = Vec::new();
    app.run(input, &mut output).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("== Choose Entree =="));
    assert!(text.contains("== Choose Side Dish =="));
    assert!(text.contains("== Choose Accompaniment =="));
    assert!(text.contains("== Order Checkout =="));
    // Mushroom Pasta 5.50 + Summer Salad 2.50 + Mixed Berries 1.00
    assert!(text.contains("$9.00"));
    assert!(text.contains("$0.72"));
    assert!(text.contains("$9.72"));

    assert_eq!(app.current_screen(), Screen::Start);
    assert!(app.order().current_state().is_empty());
}

#[test]
fn test_interactive_session_rejects_unavailable_actions() {
    let mut app = app();
    let input = Cursor::new("b\nn\n7\nhello\n");
    let mut output = Vec::new();
    app.run(input, &mut output).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("That is not available on this screen."));
    assert!(text.contains("Screen START has no menu to choose from"));
    assert!(text.contains("Unrecognized input 'hello'"));
    assert_eq!(app.current_screen(), Screen::Start);
}

#[test]
fn test_observer_sees_every_change_made_through_the_app() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let totals = Rc::new(RefCell::new(Vec::new()));
    let mut app = app();
    let sink = Rc::clone(&totals);
    app.order_mut()
        .subscribe(move |state| sink.borrow_mut().push(state.order_total_price));

    go(&mut app, NavigationAction::StartOrder);
    app.dispatch(Action::Select(0)).unwrap(); // 7.00
    go(&mut app, NavigationAction::Cancel);

    assert_eq!(
        *totals.borrow(),
        vec![Decimal::new(756, 2), Decimal::ZERO]
    );
}
