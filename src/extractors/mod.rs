pub mod og_image;
