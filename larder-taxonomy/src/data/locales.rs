//! Partial translations: (locale, tag id, label, description)

pub(crate) static TRANSLATIONS: &[(&str, &str, &str, Option<&str>)] = &[
    // Italian
    ("it", "cuisine.italian", "Italiana", Some("La cucina d'Italia, tra pasta, olio d'oliva e tradizioni regionali.")),
    ("it", "cuisine.italian.sicilian", "Siciliana", None),
    ("it", "cuisine.italian.tuscan", "Toscana", None),
    ("it", "cuisine.italian.neapolitan", "Napoletana", None),
    ("it", "cuisine.italian.roman", "Romana", None),
    ("it", "cuisine.french", "Francese", None),
    ("it", "course.appetizer", "Antipasto", None),
    ("it", "course.mainCourse", "Secondo", None),
    ("it", "course.sideDish", "Contorno", None),
    ("it", "course.dessert", "Dolce", None),
    ("it", "mainIngredient.grain.pasta", "Pasta", None),
    ("it", "mainIngredient.grain.rice", "Riso", None),
    ("it", "dietary.vegetarian", "Vegetariano", None),
    ("it", "dietary.vegetarian.vegan", "Vegano", None),
    ("it", "difficulty.beginner", "Facile", None),
    ("it", "difficulty.intermediate", "Media", None),
    ("it", "difficulty.advanced", "Difficile", None),
    ("it", "planning.quick", "Veloce", None),
    ("it", "season.summer", "Estate", None),
    ("it", "season.winter", "Inverno", None),
    // Spanish
    ("es", "cuisine.italian", "Italiana", None),
    ("es", "cuisine.mexican", "Mexicana", Some("Cocina mexicana con maíz, chiles, frijoles y salsas frescas.")),
    ("es", "cuisine.spanish", "Española", None),
    ("es", "mealType.breakfast", "Desayuno", None),
    ("es", "mealType.lunch", "Almuerzo", None),
    ("es", "mealType.dinner", "Cena", None),
    ("es", "course.appetizer", "Entrante", None),
    ("es", "course.dessert", "Postre", None),
    ("es", "mainIngredient.protein.chicken", "Pollo", None),
    ("es", "mainIngredient.grain.rice", "Arroz", None),
    ("es", "dietary.vegetarian", "Vegetariano", None),
    ("es", "dietary.vegetarian.vegan", "Vegano", None),
    ("es", "difficulty.beginner", "Fácil", None),
    ("es", "difficulty.intermediate", "Intermedio", None),
    ("es", "difficulty.advanced", "Difícil", None),
    ("es", "planning.quick", "Rápido", None),
    // French
    ("fr", "cuisine.french", "Française", Some("La technique française classique : sauces, pâtisserie et cuisine de bistrot.")),
    ("fr", "mealType.breakfast", "Petit-déjeuner", None),
    ("fr", "mealType.dinner", "Dîner", None),
    ("fr", "course.appetizer", "Entrée", None),
    ("fr", "course.mainCourse", "Plat principal", None),
    ("fr", "course.dessert", "Dessert", None),
    ("fr", "mainIngredient.protein.chicken", "Poulet", None),
    ("fr", "dietary.vegetarian", "Végétarien", None),
    ("fr", "dietary.glutenFree", "Sans gluten", None),
    ("fr", "difficulty.beginner", "Facile", None),
    ("fr", "difficulty.intermediate", "Moyen", None),
    ("fr", "difficulty.advanced", "Difficile", None),
    ("fr", "planning.quick", "Rapide", None),
];
