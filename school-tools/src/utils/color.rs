// Copyright 2026, School Management contributors
// Licensed under MIT OR Apache-2.0

#![allow(dead_code)]

pub const GREY: &str = "\x1b[0;90m";
pub const MINT: &str = "\x1b[0;92m";
pub const RED: &str = "\x1b[0;31m";
pub const YELLOW: &str = "\x1b[0;33m";
pub const LAVENDER: &str = "\x1b[0;94m";
const RESET: &str = "\x1b[0;0m";

/// Wraps a displayable value in an ANSI color escape.
pub trait Color: Sized {
    fn color(self, color: &str) -> String;

    fn grey(self) -> String {
        self.color(GREY)
    }
    fn mint(self) -> String {
        self.color(MINT)
    }
    fn red(self) -> String {
        self.color(RED)
    }
    fn yellow(self) -> String {
        self.color(YELLOW)
    }
    fn lavender(self) -> String {
        self.color(LAVENDER)
    }
}

impl<T: std::fmt::Display> Color for T {
    fn color(self, color: &str) -> String {
        format!("{color}{self}{RESET}")
    }
}
