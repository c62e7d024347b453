pub mod alert;
pub mod highlight;
pub mod layout;
pub mod popup;
pub mod status_bar;
pub mod request;
pub mod response;
