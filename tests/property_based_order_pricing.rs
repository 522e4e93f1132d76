// Property-Based Testing for order pricing and screen sequencing
// Checks the price invariants and navigation rules for arbitrary action sequences

use lunch_tray::{
    Catalog, MenuCategory, MenuItem, NavigationAction, OrderStateHolder, Screen, ScreenSequencer,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
enum OrderOp {
    Update(MenuCategory, usize),
    Reset,
}

fn category_strategy() -> impl Strategy<Value = MenuCategory> {
    prop_oneof![
        Just(MenuCategory::Entree),
        Just(MenuCategory::SideDish),
        Just(MenuCategory::Accompaniment),
    ]
}

fn op_strategy() -> impl Strategy<Value = OrderOp> {
    prop_oneof![
        4 => (category_strategy(), 0usize..4).prop_map(|(c, i)| OrderOp::Update(c, i)),
        1 => Just(OrderOp::Reset),
    ]
}

fn action_strategy() -> impl Strategy<Value = NavigationAction> {
    prop_oneof![
        Just(NavigationAction::StartOrder),
        Just(NavigationAction::Next),
        Just(NavigationAction::Back),
        Just(NavigationAction::Cancel),
        Just(NavigationAction::Confirm),
    ]
}

fn pick(catalog: &Catalog, category: MenuCategory, index: usize) -> MenuItem {
    let items = catalog.items(category);
    items[index % items.len()].clone()
}

proptest! {
    #[test]
    fn prop_prices_track_last_selection_per_category(
        ops in prop::collection::vec(op_strategy(), 0..40),
        rate_basis_points in 0u32..2500,
    ) {
        let catalog = Catalog::builtin();
        let tax_rate = Decimal::new(rate_basis_points as i64, 4);
        let mut holder = OrderStateHolder::with_tax_rate(tax_rate);
        let mut expected: [Option<Decimal>; 3] = [None; 3];

        for op in ops {
            match op {
                OrderOp::Update(category, index) => {
                    let item = pick(&catalog, category, index);
                    let slot = MenuCategory::ALL.iter().position(|c| *c == category).unwrap();
                    expected[slot] = Some(item.price);
                    holder.update(category, item);
                }
                OrderOp::Reset => {
                    holder.reset_order();
                    expected = [None; 3];
                }
            }

            let state = holder.current_state();
            let expected_total: Decimal = expected.iter().flatten().copied().sum();
            prop_assert_eq!(state.item_total_price, expected_total);
            prop_assert_eq!(state.tax_price, state.item_total_price * tax_rate);
            prop_assert_eq!(state.order_total_price, state.item_total_price + state.tax_price);
        }
    }

    #[test]
    fn prop_sequencer_never_leaves_start_at_bottom(
        actions in prop::collection::vec(action_strategy(), 0..60),
    ) {
        let mut sequencer = ScreenSequencer::new();

        for action in actions {
            let before = sequencer.history().to_vec();
            let outcome = sequencer
                .handle(action)
                .map(|record| (record.from, record.to, record.resets_order));
            match outcome {
                Ok((from, to, resets)) => {
                    prop_assert_eq!(from, *before.last().unwrap());
                    prop_assert_eq!(to, sequencer.current());
                    prop_assert_eq!(resets, to == Screen::Start && action != NavigationAction::Back);
                }
                Err(_) => prop_assert_eq!(sequencer.history(), before.as_slice()),
            }

            let history = sequencer.history();
            prop_assert_eq!(history[0], Screen::Start);
            // The stack always lists a prefix of the flow order
            prop_assert_eq!(history, &Screen::ALL[..history.len()]);
            prop_assert_eq!(sequencer.can_navigate_back(), history.len() > 1);
        }
    }
}
