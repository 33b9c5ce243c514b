pub struct EmergencyContact {
    /// Translation key for the service name.
    pub key: &'static str,
    pub name: &'static str,
    pub number: &'static str,
}

pub struct FirstAidTip {
    pub title: &'static str,
    pub symptoms: &'static str,
    pub steps: &'static [&'static str],
}

pub const EMERGENCY_CONTACTS: &[EmergencyContact] = &[
    EmergencyContact {
        key: "emergency.police",
        name: "Police",
        number: "100",
    },
    EmergencyContact {
        key: "emergency.ambulance",
        name: "Ambulance",
        number: "108",
    },
    EmergencyContact {
        key: "emergency.disaster",
        name: "Disaster Management",
        number: "1070",
    },
];

pub const FIRST_AID_TIPS: &[FirstAidTip] = &[
    FirstAidTip {
        title: "Altitude Sickness",
        symptoms: "Headache, nausea, dizziness, fatigue",
        steps: &[
            "Descend to lower altitude immediately",
            "Rest and avoid physical exertion",
            "Drink plenty of water",
            "Take pain relievers for headache",
            "Seek medical help if symptoms worsen",
        ],
    },
    FirstAidTip {
        title: "Hypothermia",
        symptoms: "Shivering, confusion, slurred speech, drowsiness",
        steps: &[
            "Move to warm shelter immediately",
            "Remove wet clothing",
            "Wrap in warm blankets",
            "Give warm (not hot) beverages",
            "Call emergency services",
        ],
    },
    FirstAidTip {
        title: "Dehydration",
        symptoms: "Extreme thirst, dark urine, dizziness, fatigue",
        steps: &[
            "Drink water slowly and steadily",
            "Rest in shade",
            "Use oral rehydration solution if available",
            "Avoid caffeine and alcohol",
            "Seek medical help if severe",
        ],
    },
    FirstAidTip {
        title: "Snake Bite",
        symptoms: "Puncture marks, pain, swelling, nausea",
        steps: &[
            "Keep calm and still",
            "Remove jewelry and tight clothing",
            "Keep bitten area below heart level",
            "DO NOT apply tourniquet or ice",
            "Get to hospital immediately",
        ],
    },
];
