pub mod alerts;
pub mod copy;
pub mod favorite;
pub mod lazy_image;
pub mod misc;
pub mod modal;
pub mod qrcode;
pub mod rating;
pub mod recipe_card;
pub mod reviews;
pub mod share;
pub mod svg;
