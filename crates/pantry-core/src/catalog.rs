// ABOUTME: Static catalog of ingredient names a user is allowed to select
// ABOUTME: Ordered list for display plus a set built once for membership checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ingredient catalog
//!
//! The catalog is fixed at compile time and never mutated. Names are compared
//! exactly as written, so `"salt"` is not a member even though `"SALT"` is.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Every selectable ingredient, in display order
const AVAILABLE_INGREDIENTS: [&str; 87] = [
    "ALMONDS",
    "AJWAIN",
    "ASAFOETIDA",
    "BABY POTATO",
    "BAKING POWDER",
    "BASMATI RICE",
    "BEANS",
    "BELL PEPPERS",
    "BHINDI",
    "BIRYANI MASALA",
    "BOTTLE GOURD",
    "BUTTER",
    "CABBAGE",
    "CARROT",
    "CASHEWS",
    "CHANA DAL",
    "CHICKEN",
    "CHICKPEAS",
    "CINNAMON",
    "CLOVES",
    "COCONUT",
    "COCONUT MILK",
    "CORIANDER",
    "CORIANDER POWDER",
    "CORN",
    "CORN FLOUR",
    "CREAM",
    "CUMIN",
    "CUMIN POWDER",
    "CURD",
    "CURRY LEAVES",
    "DRUMSTICK",
    "EGGS",
    "EGGPLANT",
    "FENUGREEK LEAVES",
    "FENNEL SEEDS",
    "FISH",
    "GARLIC",
    "GARAM MASALA",
    "GHEE",
    "GINGER",
    "GRAM FLOUR",
    "GRATED COCONUT",
    "GREEN CARDAMOM",
    "GREEN CHILIES",
    "GREEN PEAS",
    "JAGGERY",
    "KASHMIRI RED CHILI POWDER",
    "LEMON",
    "LOBIA",
    "MASOOR DAL",
    "MINCED MUTTON",
    "MOONG DAL",
    "MUSHROOMS",
    "MUSTARD SEEDS",
    "MUTTON",
    "OIL",
    "ONION",
    "PANEER",
    "PEAS",
    "POTATO",
    "PRAWNS",
    "PULAO MASALA",
    "PUMPKIN",
    "RAISINS",
    "RAJMA",
    "RED CHILI POWDER",
    "RICE",
    "RICE FLOUR",
    "SALT",
    "SAMBAR POWDER",
    "SAMOSA PASTRY SHEETS",
    "SAFFRON",
    "SCHEZWAN SAUCE",
    "SOY SAUCE",
    "SPINACH",
    "TAMARIND",
    "TAMARIND PASTE",
    "TEA BAG",
    "TINDORA",
    "TOOR DAL",
    "TOMATO",
    "TURMERIC",
    "URAD DAL",
    "WATER",
    "WHEAT FLOUR",
    "YOGURT",
];

static CATALOG_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn catalog_set() -> &'static HashSet<&'static str> {
    CATALOG_SET.get_or_init(|| AVAILABLE_INGREDIENTS.iter().copied().collect())
}

/// Check whether `name` is a selectable ingredient
#[must_use]
pub fn contains(name: &str) -> bool {
    catalog_set().contains(name)
}

/// All selectable ingredients in display order
#[must_use]
pub const fn all() -> &'static [&'static str] {
    &AVAILABLE_INGREDIENTS
}
