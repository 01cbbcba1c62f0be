mod amenity;
mod booking;
mod payment;
mod place;
mod review;
mod user;
