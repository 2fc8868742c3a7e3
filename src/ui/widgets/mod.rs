pub mod city_popup;
pub mod tile;
