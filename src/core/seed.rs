use crate::models::FeedbackRecord;

/// Sample messages the board starts with.
pub fn sample_records() -> Vec<FeedbackRecord> {
    vec![
        FeedbackRecord::new(
            1,
            "Bibliothèque centrale",
            "calme",
            "Le deuxième étage est parfait pour réviser, on entend une mouche voler.",
            "2025-03-03",
        ),
        FeedbackRecord::new(
            2,
            "Cafétéria",
            "stress",
            "Vingt minutes de queue à midi, impossible de manger avant le TD.",
            "2025-03-04",
        ),
        FeedbackRecord::new(
            3,
            "Bibliothèque centrale",
            "joie",
            "Les nouvelles salles de travail en groupe sont top !",
            "2025-03-06",
        ),
        FeedbackRecord::new(
            4,
            "Jardin nord",
            "joie",
            "Premier rayon de soleil, tout le monde mange dehors.",
            "2025-03-10",
        ),
        FeedbackRecord::new(
            5,
            "Amphithéâtre A",
            "ennui",
            "Le micro grésille et on ne voit pas les slides du fond.",
            "2025-03-12",
        ),
    ]
}
