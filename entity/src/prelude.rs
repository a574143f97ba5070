pub use super::blood_inventory::Entity as BloodInventory;
pub use super::blood_request::Entity as BloodRequest;
pub use super::donor::Entity as Donor;
pub use super::hospital::Entity as Hospital;
pub use super::statistics::Entity as Statistics;
pub use super::user::Entity as User;
