// aoi - A terminal editor for competitive programming
//
// Copyright (c) 2025 aoi team
//
// Licensed under MIT License

pub mod action;
pub mod app;
pub mod config;
pub mod core;
pub mod input;
pub mod io;
pub mod process;
pub mod render;
pub mod syntax;
pub mod theme;
pub mod viewmodel;
pub mod viewport;
