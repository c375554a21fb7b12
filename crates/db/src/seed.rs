//! Static catalogs: care guides (loaded into the store at startup) and plant
//! templates (served directly from this table).

use greencare_core::validation::validate_input;

use crate::models::care_guide::CreateCareGuide;
use crate::models::plant_template::PlantTemplate;
use crate::repositories::CareGuideRepo;
use crate::MemoryDb;

// ---------------------------------------------------------------------------
// Plant templates
// ---------------------------------------------------------------------------

pub const PLANT_TEMPLATES: &[PlantTemplate] = &[
    PlantTemplate {
        species: "Monstera Deliciosa",
        water_frequency: 7,
        sunlight_needs: "Helles indirektes Licht",
        fertilize_frequency: Some(30),
        image_url: "https://images.unsplash.com/photo-1614594975525-e45190c55d0b",
    },
    PlantTemplate {
        species: "Efeutute (Pothos)",
        water_frequency: 7,
        sunlight_needs: "Schwaches bis helles indirektes Licht",
        fertilize_frequency: Some(30),
        image_url: "https://images.unsplash.com/photo-1600411833114-9b041f1ce7be",
    },
    PlantTemplate {
        species: "Roma Tomate",
        water_frequency: 2,
        sunlight_needs: "Volle Sonne",
        fertilize_frequency: Some(14),
        image_url: "https://images.unsplash.com/photo-1591857177580-dc82b9ac4e1e",
    },
    PlantTemplate {
        species: "Kirschtomate",
        water_frequency: 2,
        sunlight_needs: "Volle Sonne",
        fertilize_frequency: Some(14),
        image_url: "https://images.unsplash.com/photo-1592978122244-d8facf6d2b2b",
    },
    PlantTemplate {
        species: "Basilikum",
        water_frequency: 3,
        sunlight_needs: "Helles direktes Licht",
        fertilize_frequency: Some(21),
        image_url: "https://images.unsplash.com/photo-1618375569909-3c8616cf7733",
    },
    PlantTemplate {
        species: "Erdbeerpflanze",
        water_frequency: 2,
        sunlight_needs: "Volle bis teilweise Sonne",
        fertilize_frequency: Some(14),
        image_url: "https://images.unsplash.com/photo-1598280688213-6273a277c153",
    },
    PlantTemplate {
        species: "Paprikapflanze",
        water_frequency: 3,
        sunlight_needs: "Volle Sonne",
        fertilize_frequency: Some(14),
        image_url: "https://images.unsplash.com/photo-1596371624647-42d19df0b38b",
    },
    PlantTemplate {
        species: "Apfelbaum",
        water_frequency: 7,
        sunlight_needs: "Volle Sonne",
        fertilize_frequency: Some(30),
        image_url: "https://images.unsplash.com/photo-1628517394673-6f73c8e28398",
    },
    PlantTemplate {
        species: "Zitronenbaum",
        water_frequency: 5,
        sunlight_needs: "Volle Sonne",
        fertilize_frequency: Some(21),
        image_url: "https://images.unsplash.com/photo-1591872203534-278fc084969e",
    },
    PlantTemplate {
        species: "Salatpflanze",
        water_frequency: 2,
        sunlight_needs: "Teilweise Sonne",
        fertilize_frequency: Some(14),
        image_url: "https://images.unsplash.com/photo-1582095949400-9edcc05a288c",
    },
    PlantTemplate {
        species: "Gurke",
        water_frequency: 2,
        sunlight_needs: "Volle Sonne",
        fertilize_frequency: Some(14),
        image_url: "https://images.unsplash.com/photo-1596397249129-c7a8f8718873",
    },
    PlantTemplate {
        species: "Kartoffelpflanze",
        water_frequency: 4,
        sunlight_needs: "Volle Sonne",
        fertilize_frequency: Some(21),
        image_url: "https://images.unsplash.com/photo-1591204890117-28c7e82603d3",
    },
    PlantTemplate {
        species: "Himbeere",
        water_frequency: 3,
        sunlight_needs: "Volle bis teilweise Sonne",
        fertilize_frequency: Some(21),
        image_url: "https://images.unsplash.com/photo-1594066521341-330a79387ec3",
    },
];

// ---------------------------------------------------------------------------
// Care guides
// ---------------------------------------------------------------------------

/// (species, watering, sunlight, fertilizing, common issues)
type GuideRow = (&'static str, &'static str, &'static str, &'static str, &'static str);

const CARE_GUIDES: &[GuideRow] = &[
    (
        "Monstera Deliciosa",
        "Gießen Sie gründlich, wenn die oberen 5-8 cm des Bodens trocken sind. Im Winter weniger gießen.",
        "Gedeiht in hellem, indirektem Licht. Direktes Sonnenlicht vermeiden.",
        "Während der Wachstumsperiode (Frühling und Sommer) monatlich mit ausgewogenem Dünger düngen.",
        "Gelbe Blätter deuten oft auf Überwässerung hin. Braune Ränder können auf zu niedrige Luftfeuchtigkeit hinweisen.",
    ),
    (
        "Efeutute (Pothos)",
        "Gießen wenn die obere Erdschicht trocken ist. Verträgt gelegentliches Austrocknen.",
        "Anpassungsfähig an die meisten Lichtbedingungen außer direkter Sonne.",
        "Während der Wachstumsperiode monatlich mit ausgewogenem Dünger düngen.",
        "Gelbe Blätter weisen meist auf Überwässerung oder schlechte Drainage hin.",
    ),
    (
        "Roma Tomate",
        "Regelmäßig und gleichmäßig gießen. Boden feucht aber nicht nass halten.",
        "Benötigt mindestens 6 Stunden direktes Sonnenlicht täglich.",
        "Alle zwei Wochen mit Tomatendünger düngen.",
        "Braune Blätter können auf Wassermangel hinweisen. Schwarze Flecken auf Früchten auf zu viel Feuchtigkeit.",
    ),
    (
        "Kirschtomate",
        "Regelmäßig gießen, besonders während der Fruchtbildung. Morgens gießen empfohlen.",
        "Volle Sonne, mindestens 6 Stunden täglich für optimales Wachstum.",
        "Alle 14 Tage mit Tomatendünger versorgen.",
        "Gelbe Blätter können Nährstoffmangel anzeigen. Aufgeplatzte Früchte durch unregelmäßiges Gießen.",
    ),
    (
        "Basilikum",
        "Regelmäßig gießen, Boden leicht feucht halten.",
        "Mindestens 6 Stunden Sonnenlicht täglich.",
        "Alle 3 Wochen mit organischem Dünger düngen.",
        "Gelbe Blätter können auf Überwässerung hinweisen. Dünne Stängel auf zu wenig Licht.",
    ),
    (
        "Erdbeerpflanze",
        "Regelmäßig gießen, besonders während der Fruchtbildung.",
        "Volle Sonne bis Halbschatten, mindestens 6 Stunden Sonne.",
        "Alle 2 Wochen während der Wachstums- und Fruchtphase düngen.",
        "Braune Früchte deuten auf Wassermangel hin. Grauschimmel bei zu hoher Feuchtigkeit.",
    ),
    (
        "Paprikapflanze",
        "Gleichmäßig feucht halten, nicht austrocknen lassen.",
        "Benötigt volle Sonne, mindestens 6 Stunden täglich.",
        "Alle 2 Wochen mit Gemüsedünger düngen.",
        "Gelbe Blätter können Nährstoffmangel anzeigen. Braune Flecken auf Früchten deuten auf Sonnenbrand hin.",
    ),
    (
        "Apfelbaum",
        "Regelmäßig wässern, besonders in der Wachstumsphase und während der Fruchtbildung.",
        "Benötigt volle Sonne für optimale Fruchtbildung.",
        "Im Frühjahr und Sommer alle 4-6 Wochen mit Obstbaumdünger düngen.",
        "Schorfbildung bei zu hoher Feuchtigkeit. Blattläuse können Wachstum beeinträchtigen.",
    ),
    (
        "Zitronenbaum",
        "Regelmäßig gießen, Staunässe vermeiden. Im Winter reduziert gießen.",
        "Heller, sonniger Standort. Im Sommer vor starker Mittagssonne schützen.",
        "Von März bis Oktober alle 3 Wochen mit Zitrusdünger versorgen.",
        "Gelbe Blätter können Eisenmangel anzeigen. Blattfall im Winter ist normal.",
    ),
    (
        "Salatpflanze",
        "Gleichmäßig feucht halten, nicht austrocknen lassen. Morgens gießen.",
        "Gedeiht am besten bei Teilsonne, zu viel direkte Sonne vermeiden.",
        "Alle 2 Wochen mit stickstoffbetontem Dünger versorgen.",
        "Braune Blattränder deuten auf Wassermangel hin. Schneckenfraß vorbeugen.",
    ),
    (
        "Gurke",
        "Regelmäßig und reichlich gießen, besonders während der Fruchtbildung.",
        "Volle Sonne, aber vor starker Mittagshitze schützen.",
        "Alle 2 Wochen mit Gemüsedünger versorgen.",
        "Bittere Früchte bei Wassermangel. Mehltau bei zu hoher Luftfeuchtigkeit.",
    ),
    (
        "Kartoffelpflanze",
        "Gleichmäßig feucht halten, nach Blüte weniger gießen.",
        "Volle Sonne für optimales Knollenwachstum.",
        "Zu Beginn der Saison mit Kartoffeldünger versorgen.",
        "Krautfäule bei zu viel Nässe. Grüne Stellen an Knollen bei zu viel Licht.",
    ),
    (
        "Himbeere",
        "Regelmäßig gießen, Mulchschicht hilft bei Feuchtigkeitserhalt.",
        "Sonniger bis halbschattiger Standort.",
        "Im Frühjahr und während der Fruchtbildung alle 3 Wochen düngen.",
        "Rutenkrankheit bei zu viel Nässe. Früchte werden klein bei Nährstoffmangel.",
    ),
];

/// The built-in care guide catalog as create payloads, in seed order.
pub fn care_guide_catalog() -> Vec<CreateCareGuide> {
    CARE_GUIDES
        .iter()
        .map(|&(species, watering, sunlight, fertilizing, issues)| CreateCareGuide {
            species: species.to_string(),
            watering_guide: watering.to_string(),
            sunlight_guide: sunlight.to_string(),
            fertilizing_guide: Some(fertilizing.to_string()),
            common_issues: Some(issues.to_string()),
        })
        .collect()
}

/// Load the built-in catalog into `pool`. Returns the number of guides
/// stored.
pub async fn seed_care_guides(pool: &MemoryDb) -> usize {
    let mut seeded = 0;
    for guide in care_guide_catalog() {
        if let Err(e) = validate_input(&guide) {
            tracing::warn!(species = %guide.species, error = %e, "Skipping invalid care guide");
            continue;
        }
        CareGuideRepo::create(pool, &guide).await;
        seeded += 1;
    }
    seeded
}
