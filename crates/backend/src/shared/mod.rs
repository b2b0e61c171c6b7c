pub mod config;
pub mod odoo;
pub mod pic;
