pub mod career_map;
