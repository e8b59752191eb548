//! Step-wise assembly of preset meals.
//!
//! A [`MealBuilder`] knows how to contribute one course at a time; the
//! [`MealDirector`] runs the standard sequence. The built [`Meal`] yields
//! plain [`LineItem`]s, so a preset combo can be attached to any order.

use crate::model::LineItem;

/// A meal assembled course by course.
#[derive(Debug, Clone, Default)]
pub struct Meal {
    items: Vec<LineItem>,
}

impl Meal {
    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Comma-separated item names, in build order.
    pub fn describe(&self) -> String {
        self.items
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Consumes the meal, yielding its line items.
    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }
}

/// Capability to assemble a meal one course at a time.
pub trait MealBuilder {
    fn add_main_course(&mut self);
    fn add_drink(&mut self);
    fn add_dessert(&mut self);
    fn build(self) -> Meal;
}

/// Builds the fixed-price combo meal.
#[derive(Debug, Clone, Default)]
pub struct ComboMealBuilder {
    meal: Meal,
}

impl MealBuilder for ComboMealBuilder {
    fn add_main_course(&mut self) {
        self.meal.add_item(LineItem::new("Burger", 1, 8.5));
    }

    fn add_drink(&mut self) {
        self.meal.add_item(LineItem::new("Soda", 1, 2.0));
    }

    fn add_dessert(&mut self) {
        self.meal.add_item(LineItem::new("Ice Cream", 1, 3.5));
    }

    fn build(self) -> Meal {
        self.meal
    }
}

/// Runs the standard build sequence against any builder.
pub struct MealDirector;

impl MealDirector {
    pub fn construct_meal(mut builder: impl MealBuilder) -> Meal {
        builder.add_main_course();
        builder.add_drink();
        builder.add_dessert();
        builder.build()
    }
}
