//! Built-in demo catalog.

use super::Product;

/// The five demo products served when no catalog is configured.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Laptop",
            999.99,
            "laptop.jpg",
            "High-performance laptop with the latest processor and ample storage.",
        )
        .with_spec("Processor", "Intel Core i7")
        .with_spec("RAM", "16GB")
        .with_spec("Storage", "512GB SSD")
        .with_spec("Display", "15.6 inch Full HD")
        .with_spec("Battery", "Up to 10 hours"),
        Product::new(
            2,
            "Smartphone",
            499.99,
            "smartphone.jpg",
            "Feature-packed smartphone with an excellent camera and long-lasting battery.",
        )
        .with_spec("Screen", "6.5 inch OLED")
        .with_spec("Camera", "Triple lens 48MP")
        .with_spec("Processor", "Snapdragon 888")
        .with_spec("Storage", "128GB")
        .with_spec("Battery", "4500mAh"),
        Product::new(
            3,
            "Headphones",
            99.99,
            "headphones.jpg",
            "Wireless over-ear headphones with noise cancellation for immersive audio experience.",
        )
        .with_spec("Type", "Over-ear")
        .with_spec("Wireless", "Yes, Bluetooth 5.0")
        .with_spec("Battery Life", "Up to 30 hours")
        .with_spec("Noise Cancellation", "Active")
        .with_spec("Weight", "250g"),
        Product::new(
            4,
            "Smartwatch",
            199.99,
            "smartwatch.jpg",
            "Fitness-focused smartwatch with heart rate monitoring and GPS tracking.",
        )
        .with_spec("Display", "1.4 inch AMOLED")
        .with_spec("Water Resistance", "5 ATM")
        .with_spec("GPS", "Built-in")
        .with_spec("Battery", "Up to 7 days")
        .with_spec("Compatibility", "iOS and Android"),
        Product::new(
            5,
            "Tablet",
            299.99,
            "tablet.jpg",
            "Versatile tablet perfect for work and entertainment on-the-go.",
        )
        .with_spec("Screen", "10.2 inch Retina display")
        .with_spec("Processor", "A13 Bionic chip")
        .with_spec("Storage", "64GB")
        .with_spec("Camera", "8MP back, 12MP front")
        .with_spec("Battery", "Up to 10 hours"),
    ]
}
