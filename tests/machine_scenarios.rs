use coinvend::application::machine::VendingMachine;
use coinvend::domain::coin::{
    DIME, DenominationId, HALF_DOLLAR, NICKEL, PENNY, QUARTER, RECOGNIZED_DENOMINATIONS,
    SACAGAWEA_DOLLAR, Token,
};
use coinvend::domain::inventory::InventoryItem;
use coinvend::domain::money::Cents;
use coinvend::domain::state::{MachineState, Screen};
use coinvend::domain::vault::ChangeSlot;
use coinvend::error::VendingError;

mod common;

fn stocked_machine() -> VendingMachine {
    VendingMachine::new(common::inventory(), &common::vault_with(50)).unwrap()
}

fn change_value(machine: &VendingMachine, coins: &[Token]) -> Cents {
    coins
        .iter()
        .map(|token| machine.validator().validate(token).unwrap().value)
        .sum()
}

#[test]
fn test_every_recognized_coin_credits_its_face_value() {
    for coin in RECOGNIZED_DENOMINATIONS {
        let mut machine = stocked_machine();
        let state = machine.insert_coin(coin.token());
        assert_eq!(state.coin_return, None);
        assert_eq!(machine.balance(), coin.value);
        assert_eq!(state.display, Screen::Balance(coin.value));
    }
}

#[test]
fn test_rejected_tokens_come_straight_back() {
    let mut machine = stocked_machine();
    machine.insert_coin(QUARTER.token());

    let arcade_token = Token::new(DIME.weight, QUARTER.size);
    for token in [PENNY.token(), arcade_token] {
        let state = machine.insert_coin(token);
        assert_eq!(state.coin_return, Some(vec![token]));
        assert_eq!(state.display.to_string(), "$0.25");
    }
    assert_eq!(machine.pending_return(), &[QUARTER.token()]);
}

#[test]
fn test_exact_change_with_thirteen_nickels() {
    let mut machine = stocked_machine();
    for _ in 0..13 {
        machine.insert_coin(NICKEL.token());
    }

    let state = machine.select_product("candy").unwrap();
    assert_eq!(
        state,
        MachineState {
            display: Screen::ThankYou,
            product_return: Some("candy".to_string()),
            coin_return: None,
        }
    );
    assert_eq!(machine.check_display().to_string(), "INSERT COIN");
    assert_eq!(machine.catalog().stock_of("candy").unwrap(), 9);
}

#[test]
fn test_overpay_candy_with_nickels() {
    let mut machine = stocked_machine();
    for _ in 0..25 {
        machine.insert_coin(NICKEL.token());
    }

    let state = machine.select_product("candy").unwrap();
    assert_eq!(state.display, Screen::ThankYou);
    assert_eq!(
        state.coin_return,
        Some(vec![QUARTER.token(), QUARTER.token(), DIME.token()])
    );
    assert_eq!(machine.balance(), Cents::ZERO);
}

#[test]
fn test_overpay_candy_with_quarters() {
    let mut machine = stocked_machine();
    for _ in 0..25 {
        machine.insert_coin(QUARTER.token());
    }

    let state = machine.select_product("candy").unwrap();
    let coins = state.coin_return.unwrap();
    assert_eq!(change_value(&machine, &coins), Cents::new(560));
    assert_eq!(coins.iter().filter(|t| **t == QUARTER.token()).count(), 22);
    assert_eq!(coins.iter().filter(|t| **t == DIME.token()).count(), 1);
    assert_eq!(coins.len(), 23);
    assert_eq!(machine.vault().count(DenominationId::Quarter), 28);
}

#[test]
fn test_overpay_cola_returns_one_nickel() {
    let mut machine = stocked_machine();
    for _ in 0..21 {
        machine.insert_coin(NICKEL.token());
    }

    let state = machine.select_product("cola").unwrap();
    assert_eq!(state.product_return.as_deref(), Some("cola"));
    assert_eq!(state.coin_return, Some(vec![NICKEL.token()]));
}

#[test]
fn test_empty_vault_shows_exact_change_only() {
    let machine = VendingMachine::new(common::inventory(), &[]).unwrap();
    assert_eq!(machine.balance(), Cents::ZERO);
    assert_eq!(machine.check_display(), Screen::ExactChangeOnly);
}

#[test]
fn test_one_low_slot_shows_exact_change_only() {
    let mut change = common::vault_with(5);
    change[1] = ChangeSlot::new(DenominationId::Dime, 4);
    let mut machine = VendingMachine::new(common::inventory(), &change).unwrap();
    assert_eq!(machine.check_display(), Screen::ExactChangeOnly);

    let state = machine.insert_coin(HALF_DOLLAR.token());
    assert_eq!(state.display, Screen::ExactChangeOnly);
}

#[test]
fn test_sold_out_leaves_session_untouched() {
    let inventory = vec![
        InventoryItem::new("candy", 65, 0),
        InventoryItem::new("chips", 50, 3),
    ];
    let mut machine = VendingMachine::new(inventory, &common::vault_with(10)).unwrap();
    for _ in 0..25 {
        machine.insert_coin(NICKEL.token());
    }

    let state = machine.select_product("candy").unwrap();
    assert_eq!(state, MachineState::display_only(Screen::SoldOut));
    assert_eq!(machine.check_display().to_string(), "$1.25");
    assert_eq!(machine.pending_return().len(), 25);

    // Credit is still good for something else.
    let state = machine.select_product("chips").unwrap();
    assert_eq!(state.display, Screen::ThankYou);
}

#[test]
fn test_sold_out_without_money() {
    let inventory = vec![InventoryItem::new("candy", 65, 0)];
    let mut machine = VendingMachine::new(inventory, &common::vault_with(10)).unwrap();
    let state = machine.select_product("candy").unwrap();
    assert_eq!(state.display.to_string(), "SOLD OUT");
    assert_eq!(machine.check_display().to_string(), "INSERT COIN");
}

#[test]
fn test_return_after_browsing() {
    let mut machine = stocked_machine();
    let mut expected = Vec::new();
    for _ in 0..10 {
        machine.insert_coin(NICKEL.token());
        expected.push(NICKEL.token());
    }
    let state = machine.select_product("cola").unwrap();
    assert_eq!(state.display.to_string(), "PRICE $1.00");
    machine.insert_coin(SACAGAWEA_DOLLAR.token());
    expected.push(SACAGAWEA_DOLLAR.token());

    let state = machine.return_coins();
    assert_eq!(state.display.to_string(), "INSERT COIN");
    assert_eq!(state.coin_return, Some(expected));
    assert_eq!(machine.check_display(), Screen::InsertCoin);
}

#[test]
fn test_unknown_product_is_an_error() {
    let mut machine = stocked_machine();
    let result = machine.select_product("gum");
    assert!(matches!(result, Err(VendingError::UnknownProduct(_))));
}
