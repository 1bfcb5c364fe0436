pub mod shell;
pub mod sidebar;
