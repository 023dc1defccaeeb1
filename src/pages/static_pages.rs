//! Guide and about pages. Static text.

use super::APP_TITLE;
use crate::models::Emotion;
use crate::ui::messages::header;

pub fn guide() -> String {
    let mut out = header("Guide");
    out.push_str(
        "1. Choisis un lieu du campus : bibliothèque, cafétéria, amphi, jardin…\n\
         2. Dis ce que tu y ressens, en une émotion.\n\
         3. Ajoute un mot si tu veux. Aucun nom, aucun compte : tout est anonyme.\n\n\
         Émotions reconnues :\n",
    );
    for e in Emotion::known() {
        out.push_str(&format!("  {} {:<7} ({})\n", e.icon, e.label, e.raw));
    }
    out.push_str(
        "\nToute autre émotion est acceptée et affichée telle quelle.\n\n\
         Dans le terminal :\n\
         \x20 messages --query biblio     lieux contenant \"biblio\"\n\
         \x20 messages --query stress     messages dont l'émotion est \"stress\"\n\
         \x20 messages --period 2025-03   messages de mars 2025\n\
         \x20 show 3                      détail du message 3\n",
    );
    out
}

pub fn about() -> String {
    let mut out = header(format!("À propos de {APP_TITLE}"));
    out.push_str(
        "Un mur d'expression pour le campus : chacun peut dire, sans se nommer,\n\
         ce qu'un lieu lui fait ressentir. Les statistiques aident à repérer\n\
         les endroits qui apaisent et ceux qui pèsent.\n\n",
    );
    out.push_str(&format!("Version {}\n", env!("CARGO_PKG_VERSION")));
    out
}
