/// Assistant reply with markdown and paragraphs longer than a narrow bubble.
pub fn long_message_fixture() -> &'static str {
    return r#"
**Kedarnath Temple** sits at 3,583 metres in the Rudraprayag district of Uttarakhand and is one of the twelve Jyotirlingas of Lord Shiva.

The temple opens in late April or early May on Akshaya Tritiya and closes on Bhai Dooj after Diwali, when the deity moves to Ukhimath for the winter.

- Trek: 16 km from Gaurikund
- Helicopter: Phata, Sersi and Guptkashi helipads
- Registration: mandatory for all pilgrims

Carry warm clothing, rain gear and a basic first aid kit. Acclimatise for a day in Guptkashi if you are coming from the plains.
"#
    .trim();
}

pub fn crowd_status_fixture() -> &'static str {
    return r#"[
  {"shrine": "Kedarnath", "crowd_level": 85, "status": "Heavy"},
  {"shrine": "Badrinath", "crowd_level": 55, "status": "Moderate"},
  {"shrine": "Gangotri", "crowd_level": 30, "status": "Light"},
  {"shrine": "Yamunotri", "crowd_level": 40, "status": "Moderate"}
]"#;
}

pub fn carbon_fixture() -> &'static str {
    return r#"{"co2_kg": 33.6, "saved_vs_suv": 17.4, "vehicle_type": "car", "distance": 200.0}"#;
}

pub fn products_fixture() -> &'static str {
    return r#"[
  {
    "id": 1,
    "name": "Aipan Wall Art",
    "description": "Traditional Kumaoni ritual art painted on handmade paper",
    "image": "/images/aipan.jpg",
    "price": 1500,
    "artisan": "Kamla Devi"
  },
  {
    "id": 2,
    "name": "Ringal Basket",
    "description": "Hand woven dwarf bamboo basket from Chamoli",
    "image": "/images/ringal.jpg",
    "price": 650.5,
    "artisan": "Mohan Singh"
  }
]"#;
}

pub fn pose_fixture() -> &'static str {
    return r#"{"status": "Adjust", "feedback": "Straighten your back and lift your chin.", "confidence": 0.876}"#;
}
