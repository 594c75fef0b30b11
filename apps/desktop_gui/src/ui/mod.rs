pub mod app;
mod picker_widget;
mod strings;
