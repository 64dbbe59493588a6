//! Seeded demo catalog.
//!
//! Fifteen products across the three categories, priced in soles. Used by
//! the CLI and the integration tests so both exercise realistic data.

use crate::catalog::{Catalog, Category, Product};
use crate::ids::ProductId;
use crate::money::{Currency, Money};

fn soles(amount: f64) -> Money {
    Money::from_decimal(amount, Currency::PEN)
}

impl Catalog {
    /// The demo catalog of the Urban Style shop.
    pub fn demo() -> Self {
        let products = vec![
            // Zapatos
            Product::new(
                ProductId::new(1),
                "Nike Air Max 90",
                soles(450.0),
                15,
                Category::Footwear,
                "img/nike-air-max-90.jpg",
                "Zapatillas deportivas clásicas con amortiguación Air",
            )
            .with_style("deportivo")
            .with_rating(5)
            .with_discount(20)
            .with_colors(&["negro", "blanco", "rojo"]),
            Product::new(
                ProductId::new(2),
                "Adidas Ultraboost",
                soles(520.0),
                10,
                Category::Footwear,
                "img/adidas-ultraboost.jpg",
                "Running premium con tecnología Boost",
            )
            .with_style("deportivo")
            .with_rating(5)
            .with_new()
            .with_colors(&["negro", "azul"]),
            Product::new(
                ProductId::new(3),
                "Converse Chuck Taylor",
                soles(280.0),
                25,
                Category::Footwear,
                "img/converse-chuck-taylor.png",
                "El clásico que nunca pasa de moda",
            )
            .with_style("casual")
            .with_colors(&["negro", "blanco", "rojo"]),
            Product::new(
                ProductId::new(4),
                "Vans Old Skool",
                soles(320.0),
                18,
                Category::Footwear,
                "img/vans-old-skool.png",
                "Estilo skate con la icónica franja lateral",
            )
            .with_style("casual")
            .with_discount(15)
            .with_colors(&["negro", "blanco"]),
            Product::new(
                ProductId::new(5),
                "New Balance 574",
                soles(380.0),
                12,
                Category::Footwear,
                "img/new-balance-574.png",
                "Comodidad y estilo retro",
            )
            .with_style("deportivo")
            .with_rating(5)
            .with_new()
            .with_colors(&["azul", "verde"]),
            // Ropa
            Product::new(
                ProductId::new(6),
                "Camiseta Nike Dri-FIT",
                soles(120.0),
                30,
                Category::Apparel,
                "img/camiseta-nike-dri-fit.png",
                "Tecnología que absorbe el sudor",
            )
            .with_style("camiseta")
            .with_colors(&["negro", "blanco", "azul"]),
            Product::new(
                ProductId::new(7),
                "Hoodie Urban Classic",
                soles(180.0),
                20,
                Category::Apparel,
                "img/hoodie-urban-classic.png",
                "Sudadera con capucha, algodón premium",
            )
            .with_style("sudadera")
            .with_rating(5)
            .with_discount(25)
            .with_colors(&["negro", "azul"]),
            Product::new(
                ProductId::new(8),
                "Jeans Slim Fit",
                soles(150.0),
                22,
                Category::Apparel,
                "img/jeans-slim-fit.png",
                "Denim de alta calidad, corte moderno",
            )
            .with_style("pantalon")
            .with_new()
            .with_colors(&["azul"]),
            Product::new(
                ProductId::new(9),
                "Chaqueta Bomber",
                soles(250.0),
                15,
                Category::Apparel,
                "img/chaqueta-bomber.png",
                "Estilo aviador, forro interior",
            )
            .with_style("chaqueta")
            .with_rating(5)
            .with_discount(30)
            .with_colors(&["negro", "verde"]),
            Product::new(
                ProductId::new(10),
                "Polo Ralph Style",
                soles(140.0),
                18,
                Category::Apparel,
                "img/polo-ralph-style.png",
                "Elegante polo de algodón piqué",
            )
            .with_style("polo")
            .with_colors(&["blanco", "azul", "rojo"]),
            // Accesorios
            Product::new(
                ProductId::new(11),
                "Gorra New Era",
                soles(85.0),
                40,
                Category::Accessory,
                "img/gorra-new-era.png",
                "Gorra snapback con bordado 3D",
            )
            .with_style("gorra")
            .with_colors(&["negro", "blanco"]),
            Product::new(
                ProductId::new(12),
                "Mochila Urban",
                soles(180.0),
                12,
                Category::Accessory,
                "img/mochila-urban.png",
                "Mochila resistente con compartimento laptop",
            )
            .with_style("mochila")
            .with_rating(5)
            .with_new()
            .with_colors(&["negro"]),
            Product::new(
                ProductId::new(13),
                "Cinturón de Cuero",
                soles(75.0),
                25,
                Category::Accessory,
                "img/cinturon-de-cuero.png",
                "Cuero genuino con hebilla metálica",
            )
            .with_style("cinturon")
            .with_discount(10)
            .with_colors(&["negro", "marrón"]),
            Product::new(
                ProductId::new(14),
                "Reloj Deportivo",
                soles(220.0),
                8,
                Category::Accessory,
                "img/reloj-deportivo.png",
                "Resistente al agua, cronómetro digital",
            )
            .with_style("reloj")
            .with_rating(5)
            .with_colors(&["negro"]),
            Product::new(
                ProductId::new(15),
                "Lentes de Sol",
                soles(160.0),
                20,
                Category::Accessory,
                "img/lentes-de-sol.png",
                "Protección UV400, estilo aviador",
            )
            .with_style("lentes")
            .with_discount(15)
            .with_colors(&["negro"]),
        ];

        Catalog::new(products)
    }
}
