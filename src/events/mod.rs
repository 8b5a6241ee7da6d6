mod keyboard;

pub use keyboard::wire_global_keydown;
