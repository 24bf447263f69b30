//! Custom widget components

mod details_panel;
mod flow;
mod footer;
mod header;
mod info_panels;
mod mind_map;

pub use details_panel::DetailsPanel;
pub use flow::FlowStrip;
pub use footer::Footer;
pub use header::MainHeader;
pub use info_panels::{BusinessCard, SetupCard, TechStackCard};
pub use mind_map::MindMap;
