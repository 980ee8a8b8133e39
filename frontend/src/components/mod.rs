pub mod result_popup;
pub mod spin_button;
pub mod wheel_canvas;

pub use result_popup::ResultPopup;
pub use spin_button::SpinButton;
pub use wheel_canvas::WheelCanvas;
