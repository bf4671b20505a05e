//! Built-in tag definitions, parents before children

use super::{tag_table, TagDef};

pub(crate) static BUILTIN_TAGS: &[TagDef] = tag_table! {
    // cuisine
    "cuisine.italian" => "Italian", 95,
        syn: ["italiana"],
        rel: ["mainIngredient.grain.pasta", "cuisine.mediterranean"],
        desc: "Cooking from Italy, built on pasta, olive oil, tomatoes and regional traditions.";
    "cuisine.italian.sicilian" => "Sicilian", 40,
        desc: "Italian island cooking with citrus, seafood, capers and Arab-influenced sweets.";
    "cuisine.italian.tuscan" => "Tuscan", 45,
        desc: "Rustic Italian cooking built on beans, bread, olive oil and grilled meats.";
    "cuisine.italian.neapolitan" => "Neapolitan", 38, syn: ["napoletana"], rel: ["dishType.pizza"];
    "cuisine.italian.roman" => "Roman", 30;
    "cuisine.french" => "French", 80, syn: ["francaise"],
        desc: "Classic French technique: sauces, pastry, braises and bistro fare.";
    "cuisine.french.provencal" => "Provençal", 30;
    "cuisine.mexican" => "Mexican", 88, rel: ["dishType.taco"],
        desc: "Mexican cooking with corn, chiles, beans and fresh salsas.";
    "cuisine.mexican.oaxacan" => "Oaxacan", 20;
    "cuisine.mexican.texMex" => "Tex-Mex", 45;
    "cuisine.chinese" => "Chinese", 85,
        desc: "Regional Chinese cooking from stir-fries and dumplings to slow braises.";
    "cuisine.chinese.sichuan" => "Sichuan", 40, syn: ["szechuan", "szechwan"],
        desc: "Bold, numbing heat from Sichuan peppercorns and chiles.";
    "cuisine.chinese.cantonese" => "Cantonese", 35, syn: ["dim sum"];
    "cuisine.japanese" => "Japanese", 82, syn: ["washoku"];
    "cuisine.indian" => "Indian", 84, rel: ["dishType.curry"],
        desc: "Spice-driven cooking from across the Indian subcontinent.";
    "cuisine.indian.northIndian" => "North Indian", 30, syn: ["punjabi"];
    "cuisine.indian.southIndian" => "South Indian", 30, syn: ["tamil", "keralan"];
    "cuisine.thai" => "Thai", 75;
    "cuisine.korean" => "Korean", 60;
    "cuisine.vietnamese" => "Vietnamese", 55;
    "cuisine.mediterranean" => "Mediterranean", 70,
        desc: "Olive oil, vegetables, legumes and seafood from around the Mediterranean.";
    "cuisine.greek" => "Greek", 58;
    "cuisine.middleEastern" => "Middle Eastern", 55, syn: ["levantine", "lebanese"];
    "cuisine.spanish" => "Spanish", 50, syn: ["tapas"];
    "cuisine.american" => "American", 78;
    "cuisine.american.southern" => "Southern", 50, syn: ["soul food"];
    "cuisine.american.cajun" => "Cajun", 35, syn: ["creole"];
    "cuisine.british" => "British", 35, syn: ["english"];
    "cuisine.caribbean" => "Caribbean", 30, syn: ["jamaican"];
    "cuisine.african" => "African", 30;
    "cuisine.african.moroccan" => "Moroccan", 32;
    "cuisine.african.ethiopian" => "Ethiopian", 25;

    // meal type
    "mealType.breakfast" => "Breakfast", 90, syn: ["brekkie"], rel: ["dishType.smoothie"];
    "mealType.brunch" => "Brunch", 60;
    "mealType.lunch" => "Lunch", 80;
    "mealType.dinner" => "Dinner", 92, syn: ["supper"];
    "mealType.snack" => "Snack", 70, syn: ["snacks"];

    // course
    "course.appetizer" => "Appetizer", 75,
        syn: ["starter", "starters", "appetiser", "hors d'oeuvres"],
        desc: "Small plates served before the main course.";
    "course.mainCourse" => "Main Course", 90, syn: ["main", "entree", "entrée", "main dish"];
    "course.sideDish" => "Side Dish", 78, syn: ["side", "sides"];
    "course.dessert" => "Dessert", 88,
        syn: ["desserts", "sweets", "pudding"],
        rel: ["mainIngredient.chocolate", "dishType.cake"],
        desc: "Sweet dishes served at the end of a meal.";
    "course.drink" => "Drink", 50, syn: ["beverage", "beverages", "drinks"];

    // dish type
    "dishType.soup" => "Soup", 80,
        syn: ["soups"],
        rel: ["season.winter", "characteristics.comfortFood"],
        desc: "Brothy or blended dishes served hot or cold.";
    "dishType.soup.chowder" => "Chowder", 25;
    "dishType.soup.bisque" => "Bisque", 15;
    "dishType.soup.broth" => "Broth", 30, syn: ["stock"];
    "dishType.stew" => "Stew", 55, syn: ["stews"];
    "dishType.salad" => "Salad", 78, syn: ["salads"];
    "dishType.sandwich" => "Sandwich", 60, syn: ["sandwiches", "sub", "hoagie", "wrap"];
    "dishType.pizza" => "Pizza", 70, syn: ["flatbread"];
    "dishType.casserole" => "Casserole", 50, syn: ["hotdish", "gratin"];
    "dishType.curry" => "Curry", 65, syn: ["curries"];
    "dishType.stirFry" => "Stir-Fry", 60, syn: ["stir fried", "wok"];
    "dishType.sauce" => "Sauce", 45, syn: ["sauces", "condiment", "dressing"];
    "dishType.bread" => "Bread", 55, syn: ["breads", "loaf"];
    "dishType.cake" => "Cake", 65, syn: ["cakes"];
    "dishType.cake.cupcake" => "Cupcakes", 35;
    "dishType.cake.cheesecake" => "Cheesecake", 40;
    "dishType.cookie" => "Cookies", 60, syn: ["biscuits"];
    "dishType.pie" => "Pie", 50, syn: ["pies", "tart", "tarts"];
    "dishType.dip" => "Dip", 40, syn: ["dips", "spread"];
    "dishType.bowl" => "Bowl", 45, syn: ["grain bowl", "buddha bowl", "power bowl"];
    "dishType.taco" => "Tacos", 55;
    "dishType.dumpling" => "Dumplings", 40, syn: ["gyoza", "potstickers", "wontons"];
    "dishType.smoothie" => "Smoothies", 40, syn: ["shake", "shakes"];
    "dishType.burger" => "Burgers", 50, syn: ["hamburger", "hamburgers"];
    "dishType.pancake" => "Pancakes", 45, syn: ["crepes", "hotcakes"];

    // dietary
    "dietary.vegetarian" => "Vegetarian", 85,
        syn: ["veggie", "meatless", "meat-free"],
        rel: ["mainIngredient.legume"],
        desc: "Dishes made without meat or fish.";
    "dietary.vegetarian.vegan" => "Vegan", 80,
        syn: ["plant-based"],
        rel: ["dietary.dairyFree"],
        desc: "Free of all animal products.";
    "dietary.glutenFree" => "Gluten-Free", 70,
        syn: ["gf", "celiac", "coeliac", "no gluten"],
        desc: "Made without wheat, barley or rye.";
    "dietary.dairyFree" => "Dairy-Free", 60, syn: ["df", "lactose-free", "no dairy"];
    "dietary.nutFree" => "Nut-Free", 35, syn: ["no nuts"];
    "dietary.lowCarb" => "Low-Carb", 60, syn: ["low carbohydrate"];
    "dietary.lowCarb.keto" => "Keto", 60, syn: ["ketogenic"];
    "dietary.paleo" => "Paleo", 40, syn: ["primal"];
    "dietary.pescatarian" => "Pescatarian", 40, syn: ["pescetarian"];
    "dietary.highProtein" => "High-Protein", 55, syn: ["protein-packed"];
    "dietary.lowFat" => "Low-Fat", 35, syn: ["lean"];
    "dietary.lowSodium" => "Low-Sodium", 25, syn: ["low salt"];
    "dietary.sugarFree" => "Sugar-Free", 30, syn: ["no sugar", "no added sugar"];
    "dietary.halal" => "Halal", 25;
    "dietary.kosher" => "Kosher", 25;

    // cooking method
    "cookingMethod.baked" => "Baked", 75, syn: ["baking", "bake", "oven-baked"];
    "cookingMethod.grilled" => "Grilled", 70,
        syn: ["grill", "grilling", "bbq", "barbecue", "barbecued"],
        rel: ["season.summer"];
    "cookingMethod.roasted" => "Roasted", 65, syn: ["roast", "roasting"];
    "cookingMethod.fried" => "Fried", 55, syn: ["frying"];
    "cookingMethod.fried.deepFried" => "Deep-Fried", 35, syn: ["deep fry", "deep frying"];
    "cookingMethod.fried.panFried" => "Pan-Fried", 40,
        syn: ["sauteed", "sautéed", "saute", "sauté", "pan seared"];
    "cookingMethod.slowCooker" => "Slow Cooker", 60, syn: ["crockpot", "crock pot", "slow cooked"];
    "cookingMethod.pressureCooker" => "Pressure Cooker", 50,
        syn: ["instant pot", "instapot", "pressure cooked"];
    "cookingMethod.airFryer" => "Air Fryer", 55, syn: ["air fried", "airfryer"];
    "cookingMethod.steamed" => "Steamed", 30, syn: ["steam", "steaming"];
    "cookingMethod.noCook" => "No-Cook", 35, syn: ["raw", "no-bake"];
    "cookingMethod.braised" => "Braised", 35, syn: ["braise", "braising"];
    "cookingMethod.smoked" => "Smoked", 30, syn: ["smoker"];
    "cookingMethod.onePot" => "One-Pot", 55, syn: ["one pan", "sheet pan", "one-pot meal"];

    // main ingredient
    "mainIngredient.protein" => "Protein", 60;
    "mainIngredient.protein.chicken" => "Chicken", 90, syn: ["poultry"];
    "mainIngredient.protein.beef" => "Beef", 80, syn: ["steak", "ground beef"];
    "mainIngredient.protein.pork" => "Pork", 70, syn: ["bacon", "ham", "sausage"];
    "mainIngredient.protein.lamb" => "Lamb", 40, syn: ["mutton"];
    "mainIngredient.protein.turkey" => "Turkey", 40;
    "mainIngredient.protein.tofu" => "Tofu", 45, syn: ["bean curd", "tempeh"];
    "mainIngredient.protein.egg" => "Eggs", 60, syn: ["omelette", "omelet"];
    "mainIngredient.seafood" => "Seafood", 65;
    "mainIngredient.seafood.fish" => "Fish", 60, syn: ["cod", "tuna", "white fish"];
    "mainIngredient.seafood.salmon" => "Salmon", 55;
    "mainIngredient.seafood.shrimp" => "Shrimp", 55, syn: ["prawn", "prawns"];
    "mainIngredient.seafood.shellfish" => "Shellfish", 30,
        syn: ["clams", "mussels", "scallops", "crab", "lobster"];
    "mainIngredient.grain" => "Grains", 50, syn: ["cereals"];
    "mainIngredient.grain.pasta" => "Pasta", 85,
        syn: ["spaghetti", "penne", "macaroni", "lasagna"],
        rel: ["cuisine.italian"],
        desc: "Fresh and dried pasta in every shape.";
    "mainIngredient.grain.rice" => "Rice", 75, syn: ["risotto", "pilaf"];
    "mainIngredient.grain.noodles" => "Noodles", 55, syn: ["ramen", "udon", "soba"];
    "mainIngredient.grain.quinoa" => "Quinoa", 35;
    "mainIngredient.grain.oats" => "Oats", 35, syn: ["oatmeal", "porridge"];
    "mainIngredient.vegetable" => "Vegetables", 60, syn: ["veggies", "veg"];
    "mainIngredient.vegetable.potato" => "Potatoes", 65, syn: ["spuds"];
    "mainIngredient.vegetable.mushroom" => "Mushrooms", 40;
    "mainIngredient.vegetable.tomato" => "Tomatoes", 45;
    "mainIngredient.vegetable.leafyGreens" => "Leafy Greens", 35, syn: ["spinach", "kale", "greens"];
    "mainIngredient.vegetable.squash" => "Squash", 30, syn: ["zucchini", "pumpkin", "courgette"];
    "mainIngredient.legume" => "Legumes", 40, syn: ["pulses"];
    "mainIngredient.legume.beans" => "Beans", 45, syn: ["black beans", "kidney beans"];
    "mainIngredient.legume.lentils" => "Lentils", 35, syn: ["dal", "dhal"];
    "mainIngredient.legume.chickpeas" => "Chickpeas", 35, syn: ["garbanzo", "garbanzo beans"];
    "mainIngredient.dairy" => "Dairy", 40;
    "mainIngredient.dairy.cheese" => "Cheese", 70, syn: ["cheesy"];
    "mainIngredient.fruit" => "Fruit", 50, syn: ["fruits", "fruity"];
    "mainIngredient.fruit.berries" => "Berries", 40,
        syn: ["strawberry", "strawberries", "blueberries", "raspberries"];
    "mainIngredient.fruit.apple" => "Apples", 40;
    "mainIngredient.fruit.citrus" => "Citrus", 35, syn: ["lemon", "lime", "orange"];
    "mainIngredient.chocolate" => "Chocolate", 60, syn: ["cocoa", "chocolatey"];
    "mainIngredient.nuts" => "Nuts", 30, syn: ["almonds", "peanuts", "walnuts", "pecans"];

    // season
    "season.spring" => "Spring", 45;
    "season.summer" => "Summer", 60, syn: ["summertime"];
    "season.fall" => "Fall", 55, syn: ["autumn"];
    "season.winter" => "Winter", 50, syn: ["wintertime"];
    "season.holiday" => "Holiday", 55, syn: ["holidays", "festive"];
    "season.holiday.christmas" => "Christmas", 50, syn: ["xmas"];
    "season.holiday.thanksgiving" => "Thanksgiving", 45;
    "season.holiday.easter" => "Easter", 30;
    "season.holiday.halloween" => "Halloween", 25;
    "season.holiday.newYear" => "New Year", 20, syn: ["new years eve", "nye"];

    // planning
    "planning.quick" => "Quick", 90,
        syn: ["fast", "quick and easy", "30-minute", "30 minutes or less"],
        rel: ["planning.weeknight", "difficulty.beginner"],
        desc: "Ready in about 30 minutes or less.";
    "planning.weeknight" => "Weeknight", 70, syn: ["weeknight dinner", "busy weeknight"];
    "planning.makeAhead" => "Make-Ahead", 55, syn: ["prep ahead"];
    "planning.mealPrep" => "Meal Prep", 60, syn: ["batch cooking"];
    "planning.freezerFriendly" => "Freezer-Friendly", 40, syn: ["freezable", "freezer"];
    "planning.budgetFriendly" => "Budget-Friendly", 55,
        syn: ["budget", "cheap", "inexpensive", "affordable"];
    "planning.leftovers" => "Leftovers", 30;
    "planning.crowd" => "Feeds a Crowd", 40, syn: ["party", "potluck", "entertaining", "crowd-pleaser"];
    "planning.kidFriendly" => "Kid-Friendly", 50, syn: ["family friendly", "kids"];
    "planning.lunchbox" => "Lunchbox", 25, syn: ["packed lunch"];

    // difficulty
    "difficulty.beginner" => "Beginner", 70,
        syn: ["easy", "simple", "beginner-friendly"],
        desc: "Simple techniques and short ingredient lists.";
    "difficulty.intermediate" => "Intermediate", 50, syn: ["medium", "moderate"];
    "difficulty.advanced" => "Advanced", 35, syn: ["hard", "difficult", "challenging", "expert"];

    // characteristics
    "characteristics.comfortFood" => "Comfort Food", 65, syn: ["comfort", "hearty"];
    "characteristics.healthy" => "Healthy", 70, syn: ["nutritious", "wholesome"];
    "characteristics.spicy" => "Spicy", 55, syn: ["hot", "fiery"];
    "characteristics.savory" => "Savory", 35, syn: ["savoury"];
    "characteristics.creamy" => "Creamy", 35;
    "characteristics.crispy" => "Crispy", 35, syn: ["crunchy", "crisp"];
    "characteristics.light" => "Light", 35, syn: ["fresh"];
    "characteristics.indulgent" => "Indulgent", 30, syn: ["decadent", "rich"];
    "characteristics.classic" => "Classic", 45, syn: ["traditional", "old-fashioned"];
    "characteristics.fusion" => "Fusion", 20;
    "characteristics.sweet" => "Sweet", 40;
};
