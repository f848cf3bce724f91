//! Request body validation rules.
//!
//! Each rule is a pure function over the parsed JSON body that yields at most
//! one [`FieldError`]. Rules for a field are evaluated in declaration order
//! and the first failure wins, so a field never reports more than one error.

use axum_helpers::{FieldError, ValidateRules};
use serde_json::Value;

use crate::models::{CreateProduct, UpdateProduct};

pub const NAME_REQUIRED: &str = "Name is required";
pub const PRICE_REQUIRED: &str = "Price is required";
pub const PRICE_NOT_A_NUMBER: &str = "Price must be a number";
pub const PRICE_NOT_POSITIVE: &str = "Price must be greater than 0";
pub const AVAILABILITY_NOT_A_BOOLEAN: &str = "Availability must be a boolean";

type Rule = fn(&Value) -> Option<FieldError>;

fn name_present(body: &Value) -> Option<FieldError> {
    match body.get("name") {
        Some(value) if !value.is_null() => None,
        _ => Some(FieldError::body("name", NAME_REQUIRED)),
    }
}

fn name_non_empty(body: &Value) -> Option<FieldError> {
    match body.get("name").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => None,
        _ => Some(FieldError::body("name", NAME_REQUIRED)),
    }
}

fn price_present(body: &Value) -> Option<FieldError> {
    match body.get("price") {
        Some(value) if !value.is_null() => None,
        _ => Some(FieldError::body("price", PRICE_REQUIRED)),
    }
}

fn price_is_number(body: &Value) -> Option<FieldError> {
    match body.get("price") {
        Some(value) if value.is_number() => None,
        _ => Some(FieldError::body("price", PRICE_NOT_A_NUMBER)),
    }
}

fn price_is_positive(body: &Value) -> Option<FieldError> {
    match body.get("price").and_then(Value::as_f64) {
        Some(price) if price > 0.0 => None,
        _ => Some(FieldError::body("price", PRICE_NOT_POSITIVE)),
    }
}

fn availability_is_boolean(body: &Value) -> Option<FieldError> {
    match body.get("availability") {
        Some(value) if value.is_boolean() => None,
        _ => Some(FieldError::body("availability", AVAILABILITY_NOT_A_BOOLEAN)),
    }
}

const NAME_RULES: &[Rule] = &[name_present, name_non_empty];
const PRICE_RULES: &[Rule] = &[price_present, price_is_number, price_is_positive];
const AVAILABILITY_RULES: &[Rule] = &[availability_is_boolean];

fn first_failure(rules: &[Rule], body: &Value) -> Option<FieldError> {
    rules.iter().find_map(|rule| rule(body))
}

/// Rules for the create payload: `name` and `price`.
pub fn create_rules(body: &Value) -> Vec<FieldError> {
    [NAME_RULES, PRICE_RULES]
        .iter()
        .filter_map(|rules| first_failure(rules, body))
        .collect()
}

/// Rules for the full-update payload: `name`, `price` and `availability`.
pub fn update_rules(body: &Value) -> Vec<FieldError> {
    [NAME_RULES, PRICE_RULES, AVAILABILITY_RULES]
        .iter()
        .filter_map(|rules| first_failure(rules, body))
        .collect()
}

impl ValidateRules for CreateProduct {
    fn validate_rules(body: &Value) -> Vec<FieldError> {
        create_rules(body)
    }
}

impl ValidateRules for UpdateProduct {
    fn validate_rules(body: &Value) -> Vec<FieldError> {
        update_rules(body)
    }
}
