//! Compiled-in exercise catalog.
//!
//! The catalog is reference data: it is fixed at build time and never
//! mutated. Progress records refer to exercises by `id` only.

use serde::Serialize;

/// A single physiotherapy exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    /// Target timer length in seconds.
    pub duration: u32,
    pub sets: u32,
    /// Ordered steps.
    pub instructions: &'static [&'static str],
}

impl Exercise {
    /// Duration rounded up to whole minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.duration.div_ceil(60)
    }
}

/// Weekday labels, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"];

/// The reference exercise set.
pub const EXERCISES: &[Exercise] = &[
    Exercise {
        id: 1,
        name: "Seitliche Rumpfdehnung",
        description: "Dehnung zur Korrektur der Wirbelsäulenkrümmung",
        category: "Dehnung",
        duration: 60,
        sets: 3,
        instructions: &[
            "Stehe aufrecht mit hüftbreit auseinander stehenden Füssen",
            "Hebe den Arm auf der konvexen Seite über den Kopf",
            "Beuge den Oberkörper langsam zur konkaven Seite",
            "Halte die Position für 20 Sekunden",
            "Kehre langsam zur Ausgangsposition zurück",
        ],
    },
    Exercise {
        id: 2,
        name: "Schroth-Atmung",
        description: "Rotationsatmung nach Schroth-Methode",
        category: "Atmung",
        duration: 120,
        sets: 5,
        instructions: &[
            "Nimm eine korrigierte Haltung ein",
            "Atme tief in die eingesunkene Seite des Brustkorbs",
            "Stelle dir vor, wie der Brustkorb sich ausdehnt",
            "Atme langsam aus und halte die Korrektur",
            "Wiederhole die Atmung bewusst und kontrolliert",
        ],
    },
    Exercise {
        id: 3,
        name: "Katzenbuckel & Pferderücken",
        description: "Mobilisation der Wirbelsäule",
        category: "Mobilisation",
        duration: 90,
        sets: 10,
        instructions: &[
            "Beginne im Vierfüsslerstand",
            "Runde den Rücken nach oben (Katzenbuckel)",
            "Halte kurz und atme aus",
            "Senke den Bauch ab und hebe den Kopf (Pferderücken)",
            "Bewege dich fliessend zwischen beiden Positionen",
        ],
    },
    Exercise {
        id: 4,
        name: "Seitlage-Übung",
        description: "Kräftigung der Rumpfmuskulatur",
        category: "Kräftigung",
        duration: 60,
        sets: 2,
        instructions: &[
            "Lege dich auf die konvexe Seite",
            "Stütze den Kopf mit der unteren Hand",
            "Hebe das obere Bein langsam an",
            "Halte die Position für 5 Sekunden",
            "Senke das Bein kontrolliert ab",
        ],
    },
    Exercise {
        id: 5,
        name: "Beckenbodenaktivierung",
        description: "Stabilisation des Beckens",
        category: "Stabilisation",
        duration: 45,
        sets: 10,
        instructions: &[
            "Lege dich auf den Rücken mit angewinkelten Beinen",
            "Spanne den Beckenboden leicht an",
            "Drücke die Lendenwirbelsäule sanft in den Boden",
            "Halte die Spannung für 5 Sekunden",
            "Entspanne und wiederhole",
        ],
    },
    Exercise {
        id: 6,
        name: "Wandgleiten",
        description: "Haltungskorrektur und Schulterblatt-Kontrolle",
        category: "Haltung",
        duration: 60,
        sets: 8,
        instructions: &[
            "Stehe mit dem Rücken an der Wand",
            "Arme in U-Position an der Wand",
            "Gleite mit den Armen nach oben",
            "Halte Kontakt zur Wand",
            "Gleite langsam zurück nach unten",
        ],
    },
];

/// Read-only view over a fixed list of exercises.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    exercises: &'static [Exercise],
}

impl Catalog {
    pub const fn new(exercises: &'static [Exercise]) -> Self {
        Self { exercises }
    }

    /// The reference catalog shipped with the app.
    pub const fn builtin() -> Self {
        Self::new(EXERCISES)
    }

    /// All exercises in display order.
    pub fn list_exercises(&self) -> &'static [Exercise] {
        self.exercises
    }

    pub fn get(&self, id: u32) -> Option<&'static Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.exercises.iter().map(|e| e.id)
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Render seconds as `M:SS`.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
