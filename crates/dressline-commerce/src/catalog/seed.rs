//! The boutique's seeded catalog and reviews.

use super::{Category, Product, ProductTag, Review};
use crate::money::Money;

const SHOP_IMAGES: &str = "https://raw.githubusercontent.com/ahmath-musharraf/DressLine/refs/heads/main/Image";
const UNSPLASH: &str = "https://images.unsplash.com";
const UNSPLASH_PARAMS: &str = "auto=format&fit=crop&q=80&w=800";

const REGULAR_SIZES: [&str; 4] = ["S", "M", "L", "XL"];
const DEFAULT_SIZES: [&str; 6] = ["S", "M", "L", "XL", "XXL", "XXXL"];

fn shop_image(n: u32) -> String {
    format!("{SHOP_IMAGES}/{n}.jpg")
}

fn unsplash(photo: &str) -> String {
    format!("{UNSPLASH}/photo-{photo}?{UNSPLASH_PARAMS}")
}

/// An in-house product photographed in the shop.
fn exclusive(id: u32, name: &str, price: i64, image: u32) -> Product {
    let image = shop_image(image);
    Product::new(id, name, "Dress Line Exclusive", Money::lkr(price), Category::Women, image.clone())
        .with_images([image])
        .with_sizes(REGULAR_SIZES)
}

/// A partner-brand product with stock photography.
fn partner(id: u32, name: &str, brand: &str, price: i64, photos: &[&str]) -> Product {
    let images: Vec<String> = photos.iter().map(|p| unsplash(p)).collect();
    Product::new(id, name, brand, Money::lkr(price), Category::Women, images[0].clone())
        .with_images(images)
}

pub(crate) fn products() -> Vec<Product> {
    vec![
        exclusive(1, "Work Midi Length Dress", 3500, 5)
            .with_original_price(Money::lkr(4500))
            .with_tag(ProductTag::Sale),
        exclusive(2, "Two Piece Set", 4200, 1).with_tag(ProductTag::New),
        exclusive(3, "Two Piece Set", 4200, 8).with_tag(ProductTag::BestSeller),
        exclusive(4, "Denim Short", 2800, 6).with_tag(ProductTag::BestSeller),
        exclusive(5, "Long Top", 2700, 7)
            .with_original_price(Money::lkr(4000))
            .with_tag(ProductTag::Sale),
        exclusive(6, "Work Midi Length Dress", 3800, 10),
        exclusive(7, "Ladies T - Shirt Short Sleeve", 2300, 9).with_tag(ProductTag::New),
        partner(8, "Summer Floral Top", "Breezy", 2500, &[
            "1564257631407-4deb1f99d992",
            "1521572163474-6864f9cf17ab",
        ])
        .with_original_price(Money::lkr(3500))
        .with_tag(ProductTag::Sale)
        .with_sizes(DEFAULT_SIZES),
        partner(9, "Embroidered Chiffon Maxi", "Luxe", 8900, &[
            "1496747611176-843222e1e57c",
            "1595777457583-95e059d581b8",
        ])
        .with_tag(ProductTag::New)
        .with_sizes(["M", "L", "XL", "XXL"]),
        partner(10, "Cotton Linen Kurti", "Ethnic Weave", 4200, &[
            "1583391733958-e02d07e8693d",
            "1605763240004-7e93b172d754",
        ])
        .with_sizes(DEFAULT_SIZES),
        partner(11, "Classic Beige Heels", "Step Up", 6500, &[
            "1543163521-1bf539c55dd2",
            "1518953789413-9598f0909795",
        ])
        .with_tag(ProductTag::BestSeller)
        .with_sizes(["36", "37", "38", "39", "40", "41"]),
        partner(12, "Floral Jumpsuit", "Chic", 5800, &["1564584217132-2271feaeb3c5"])
            .with_original_price(Money::lkr(7500))
            .with_tag(ProductTag::Sale)
            .with_sizes(DEFAULT_SIZES),
        partner(13, "Designer Tote Bag", "Luxe", 9500, &[
            "1590874103328-3af216886c78",
            "1591561954557-26941169b49e",
        ]),
        partner(14, "Georgette Party Saree", "Elegant", 14500, &["1610030469983-98e550d6193c"]),
    ]
}

pub(crate) fn reviews() -> Vec<Review> {
    vec![
        Review::new(1, "Fathima S.", 5, "Absolutely love the abayas from Dress Line! The quality is unmatched in Batticaloa.", "2 weeks ago"),
        Review::new(2, "Dilhani Perera", 5, "Bought a saree for my cousin's wedding. Stunning collection and great prices.", "1 month ago"),
        Review::new(3, "Aisha M.", 4, "Very trendy tops. I wish there were more size options, but the staff is very helpful.", "3 weeks ago"),
        Review::new(4, "Zainab R.", 5, "The best place for modest wear. Their new collection is beautiful.", "1 week ago"),
        Review::new(5, "Mariyam K.", 5, "Fast delivery within Batticaloa. The material is so soft and comfortable.", "2 days ago"),
        Review::new(6, "Sarah L.", 5, "I love their handbag collection. Premium quality at affordable prices.", "5 days ago"),
        Review::new(7, "Nusra F.", 4, "Good collection of heels. Comfortable for daily wear.", "1 week ago"),
        Review::new(8, "Rifka A.", 5, "The customer service is excellent. They helped me choose the right size.", "2 weeks ago"),
        Review::new(9, "Tharushi J.", 5, "Highly recommend their casual wear. Stylish and durable.", "3 weeks ago"),
        Review::new(10, "Shazna N.", 5, "My go-to shop for all fashion needs. Love the ambiance of the store too.", "1 month ago"),
    ]
}
