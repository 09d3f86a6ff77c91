pub mod fetch_og_image;
