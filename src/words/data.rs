//! Word list data, five lowercase letters per word.
//!
//! Accented Spanish words are left out so every entry is plain ASCII
//! and one char per letter.

/// English targets.
pub static ENGLISH_WORDS: &[&str] = &[
    "apple", "beach", "brain", "bread", "brick", "bring", "brown", "chair",
    "chess", "clean", "clear", "climb", "clock", "cloud", "coast", "count",
    "crane", "cream", "crowd", "dance", "dream", "drink", "eagle", "earth",
    "field", "flame", "floor", "fresh", "fruit", "ghost", "glass", "grape",
    "grass", "green", "happy", "heart", "horse", "house", "juice", "laugh",
    "lemon", "light", "lucky", "lunch", "magic", "money", "mouse", "music",
    "night", "ocean", "olive", "onion", "paint", "paper", "peace", "phone",
    "piano", "pilot", "pizza", "plane", "plant", "plate", "point", "pride",
    "queen", "radio", "river", "robot", "round", "scale", "sheep", "shine",
    "shirt", "smile", "snake", "sound", "space", "spice", "spoon", "sport",
    "stone", "storm", "sugar", "sweet", "table", "teach", "tiger", "toast",
    "tooth", "train", "water", "whale", "wheat", "world", "young", "zebra",
];

/// Spanish targets.
pub static SPANISH_WORDS: &[&str] = &[
    "amigo", "baile", "banco", "barco", "bolsa", "brazo", "burro", "cable",
    "calle", "campo", "carne", "carta", "cerdo", "cielo", "clase", "cobre",
    "coche", "corto", "cuero", "disco", "dulce", "fecha", "feliz", "flaco",
    "frase", "fresa", "fuego", "gallo", "ganso", "gente", "globo", "golpe",
    "grano", "hielo", "hueso", "huevo", "joven", "juego", "jugar", "labio",
    "largo", "leche", "lento", "letra", "libro", "lobos", "luces", "madre",
    "mango", "manos", "mente", "metal", "miedo", "mundo", "nieve", "noche",
    "norte", "nubes", "padre", "pasta", "perro", "piano", "pieza", "plato",
    "playa", "plaza", "pollo", "pulpo", "queso", "radio", "ramas", "reloj",
    "risas", "ropas", "rosas", "rubio", "salsa", "salto", "selva", "silla",
    "suelo", "tarde", "tigre", "torre", "trigo", "verde", "viaje", "vidas",
    "vocal", "zorro",
];
