use leptos::prelude::*;

use crate::components::icons::{CloudRain, Droplets, Sun, Wind};

pub struct DiseaseEntry {
    pub icon: fn() -> AnyView,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub fn disease_entries() -> Vec<DiseaseEntry> {
    vec![
        DiseaseEntry {
            icon: || view! { <Droplets class="w-6 h-6 text-sky-400" /> }.into_any(),
            title: "Bacterial Leaf Blight",
            description: "Caused by Xanthomonas oryzae, bacterial leaf blight begins as water-soaked \
                stripes near the leaf tips that turn yellow and then greyish white as they dry out. \
                Infected seedlings wilt entirely, a phase farmers call kresek. The bacterium spreads \
                through irrigation water and storm injuries, and losses are heaviest in fields with \
                high nitrogen dressing and standing water after heavy rain.",
            image: "/public/diseases/bacterial_leaf_blight.jpg",
        },
        DiseaseEntry {
            icon: || view! { <Sun class="w-6 h-6 text-amber-400" /> }.into_any(),
            title: "Brown Spot",
            description: "Brown spot, caused by the fungus Bipolaris oryzae, shows up as circular to \
                oval brown lesions with grey centers scattered over the leaf blade and glumes. It is \
                classically a disease of stressed crops: potassium-starved soils, drought spells, and \
                old leaves are attacked first. Infected seed carries the fungus into the next season, \
                so grain from spotted fields should not be saved for sowing.",
            image: "/public/diseases/brown_spot.jpg",
        },
        DiseaseEntry {
            icon: || view! { <Wind class="w-6 h-6 text-emerald-400" /> }.into_any(),
            title: "Leaf Blast",
            description: "Leaf blast is the foliar form of Magnaporthe oryzae, the most damaging rice \
                pathogen worldwide. Lesions are spindle shaped with grey centers and dark brown \
                margins, and under cool nights with long dew periods they merge until whole leaves \
                collapse. When the fungus reaches the neck of the panicle it can cut off grain \
                filling entirely, so foliar outbreaks before booting warrant immediate attention.",
            image: "/public/diseases/leaf_blast.jpg",
        },
        DiseaseEntry {
            icon: || view! { <Droplets class="w-6 h-6 text-teal-400" /> }.into_any(),
            title: "Sheath Blight",
            description: "Sheath blight, caused by Rhizoctonia solani, starts as greenish-grey \
                ellipsoid lesions on the leaf sheath near the waterline and climbs the plant as the \
                canopy closes. The fungus survives between seasons as sclerotia floating onto new \
                fields with irrigation water. Dense planting and heavy nitrogen push the disease \
                upward onto the flag leaf, where it directly erodes yield.",
            image: "/public/diseases/sheath_blight.jpg",
        },
        DiseaseEntry {
            icon: || view! { <CloudRain class="w-6 h-6 text-indigo-400" /> }.into_any(),
            title: "Rice False Smut",
            description: "Rice false smut, caused by Ustilaginoidea virens, transforms individual \
                grains into velvety smut balls that start orange and mature to greenish black before \
                bursting and releasing spores. Affected grains lose weight, turn chalky, and \
                germinate poorly. Warm humid weather, frequent rainfall, dense canopies, and \
                excessive nitrogen fertilization all favor its development.",
            image: "/public/diseases/rice_false_smut.jpg",
        },
    ]
}
