pub use super::amenity::Entity as Amenity;
pub use super::booking::Entity as Booking;
pub use super::payment::Entity as Payment;
pub use super::place::Entity as Place;
pub use super::place_amenity::Entity as PlaceAmenity;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
