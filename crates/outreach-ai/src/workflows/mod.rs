pub mod catalog;
pub mod outreach;
