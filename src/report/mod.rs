pub mod outfmt6;
