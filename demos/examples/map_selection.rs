// Copyright 2025 the Geopick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Map selection.
//!
//! Treat a `kurbo::Rect` as the rectangle a user dragged on a map, select the
//! establishments under it, and print them as table rows.
//!
//! Run:
//! - `cargo run -p geopick_demos --example map_selection`

use geopick_index::{KdTree, Point, Rectangle};
use kurbo::Rect;

struct Shop {
    name: &'static str,
    district: &'static str,
}

fn main() {
    // (longitude, latitude) in degrees.
    let shops = [
        (-46.6333, -23.5505, "Pão da Sé", "Sé"),
        (-46.6388, -23.5489, "Café Anhangabaú", "Centro"),
        (-46.6250, -23.5614, "Livraria Liberdade", "Liberdade"),
        (-46.6914, -23.5629, "Padaria Pinheiros", "Pinheiros"),
        (-43.1729, -22.9068, "Bar Carioca", "Centro"),
    ];
    let tree: KdTree<Shop> = shops
        .into_iter()
        .map(|(lon, lat, name, district)| Point::new(lon, lat, Shop { name, district }))
        .collect();

    // The drag started at the bottom right and ended at the top left.
    let drawn = Rect::new(-46.62, -23.57, -46.64, -23.54);
    let area = Rectangle::from(drawn);

    println!("{:<20} {:<10} {:>9} {:>9}", "name", "district", "lon", "lat");
    for p in tree.search(&area) {
        let shop = p.payload();
        println!(
            "{:<20} {:<10} {:>9.4} {:>9.4}",
            shop.name,
            shop.district,
            p.x(),
            p.y()
        );
    }

    let outline = area.to_kurbo();
    println!(
        "selection {:.2} x {:.2} degrees, {} of {} establishments",
        outline.width(),
        outline.height(),
        tree.count_in(&area),
        tree.len()
    );
}
