//! WASM-specific tests for the JavaScript surface.
//!
//! Run with: wasm-pack test --headless --chrome

#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Object, Reflect};
use othello::api;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).expect("field must exist")
}

fn hot_seat_config() -> JsValue {
    let config = Object::new();
    Reflect::set(&config, &JsValue::from_str("computer"), &JsValue::NULL).unwrap();
    config.into()
}

#[wasm_bindgen_test]
fn wasm_initializes() {
    assert!(othello::wasm_ready());
    api::init_logging(Some("debug".to_string())).unwrap();
    api::init_logging(None).unwrap();
}

#[wasm_bindgen_test]
fn new_game_reports_initial_state() {
    let state = api::new_game(JsValue::UNDEFINED).unwrap();

    assert_eq!(field(&state, "black_count").as_f64(), Some(2.0));
    assert_eq!(field(&state, "white_count").as_f64(), Some(2.0));
    assert_eq!(field(&state, "side_to_move").as_string().as_deref(), Some("black"));
    assert_eq!(field(&state, "is_game_over").as_bool(), Some(false));
    assert_eq!(Array::from(&field(&state, "board")).length(), 64);
}

#[wasm_bindgen_test]
fn place_then_computer_reply() {
    api::new_game(JsValue::UNDEFINED).unwrap();

    let state = api::place(2, 3).unwrap();
    assert_eq!(field(&state, "black_count").as_f64(), Some(4.0));
    assert_eq!(field(&state, "computer_to_move").as_bool(), Some(true));

    let state = api::computer_move().unwrap();
    assert_eq!(field(&state, "side_to_move").as_string().as_deref(), Some("black"));
    let last = field(&state, "last_move");
    assert_eq!(field(&last, "row").as_f64(), Some(2.0));
    assert_eq!(field(&last, "col").as_f64(), Some(2.0));
}

#[wasm_bindgen_test]
fn hot_seat_config_disables_computer() {
    api::new_game(hot_seat_config()).unwrap();
    api::place(2, 3).unwrap();

    assert!(api::computer_move().is_err());
    let state = api::place(2, 2).unwrap();
    assert_eq!(field(&state, "side_to_move").as_string().as_deref(), Some("black"));
}

#[wasm_bindgen_test]
fn errors_surface_as_js_errors() {
    api::new_game(JsValue::UNDEFINED).unwrap();

    assert!(api::place(8, 0).is_err());
    assert!(api::place(0, 0).is_err());
    assert!(api::is_legal(9, 9).is_err());
    assert_eq!(api::is_legal(2, 3).ok(), Some(true));
    assert!(api::get_result().unwrap().is_undefined());
}

#[wasm_bindgen_test]
fn reset_restores_initial_layout() {
    api::new_game(JsValue::UNDEFINED).unwrap();
    api::place(2, 3).unwrap();

    let state = api::reset_game().unwrap();

    assert_eq!(field(&state, "black_count").as_f64(), Some(2.0));
    assert_eq!(Array::from(&api::legal_moves().unwrap()).length(), 4);
}
