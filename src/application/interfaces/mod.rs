/// Email service interface
pub mod email;
/// List service interface
pub mod list;
/// Opportunity service interface
pub mod opportunity;
/// Prospect service interface
pub mod prospect;
/// Prospect account service interface
pub mod prospect_account;
/// User service interface
pub mod user;
/// Visit service interface
pub mod visit;
/// Visitor service interface
pub mod visitor;
