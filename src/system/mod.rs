pub mod bindable;
