pub mod app_state;
pub mod focus;
pub mod kv_list;
pub mod mode;
pub mod request_state;
pub mod response_state;
pub mod text_buffer;
