#![allow(dead_code)]

use std::cell::RefCell;

// ============================================================================
// Test Receivers
// ============================================================================

#[derive(Debug, Default)]
pub struct Thermostat {
    pub target: i32,
    pub history: Vec<i32>,
}

impl Thermostat {
    pub fn new(target: i32) -> Self {
        Self {
            target,
            history: Vec::new(),
        }
    }

    pub fn target(&self) -> i32 {
        self.target
    }

    pub fn distance(&self, reading: i32) -> i32 {
        (self.target - reading).abs()
    }

    pub fn set_target(&mut self, target: i32) -> i32 {
        self.history.push(self.target);
        self.target = target;
        self.target
    }
}

pub struct OrderRecorder<'a> {
    pub id: usize,
    pub order: &'a RefCell<Vec<usize>>,
}

impl OrderRecorder<'_> {
    pub fn record(&self) {
        self.order.borrow_mut().push(self.id);
    }
}

// ============================================================================
// Free Functions
// ============================================================================

pub fn double(value: i32) -> i32 {
    value * 2
}

pub fn square(value: i32) -> i32 {
    value * value
}

pub fn concat(left: &'static str, right: &'static str) -> String {
    format!("{left}{right}")
}
