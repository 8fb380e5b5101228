/// One anatomical concept and the scene objects that render it.
pub struct PointConcept {
    /// Canonical (normalized) key.
    pub key: &'static str,
    /// Scene object names, left before right for bilateral points.
    pub renderer_ids: &'static [&'static str],
}

/// Every varma point present in the viewer scene.
pub const POINT_TABLE: &[PointConcept] = &[
    PointConcept {
        key: "utchi",
        renderer_ids: &["1_UtchiVarmam"],
    },
    PointConcept {
        key: "kondaikolli",
        renderer_ids: &["2_KondaiKolli"],
    },
    PointConcept {
        key: "seerungkolli",
        renderer_ids: &["3_Seerungkolli"],
    },
    PointConcept {
        key: "pidari",
        renderer_ids: &["4_PidariVarmam"],
    },
    PointConcept {
        key: "suruthi",
        renderer_ids: &["5_SuruthiVarmam"],
    },
    PointConcept {
        key: "porchai",
        renderer_ids: &["6_Porchai_L", "6_Porchai_R"],
    },
    PointConcept {
        key: "suzhiyadi",
        renderer_ids: &["7_SuzhiyadiVarmam"],
    },
    PointConcept {
        key: "kutri",
        renderer_ids: &["8_KutriVarmam_L", "8_KutriVarmam_R"],
    },
    PointConcept {
        key: "sevikutri",
        renderer_ids: &["9_Sevikutri_L", "9_Sevikutri_R"],
    },
    PointConcept {
        key: "poigai",
        renderer_ids: &["10_PoigaiKaalam"],
    },
    PointConcept {
        key: "chenni",
        renderer_ids: &["11_ChenniVarmam"],
    },
    PointConcept {
        key: "aasan",
        renderer_ids: &["12_AasanKaalam"],
    },
    PointConcept {
        key: "annan",
        renderer_ids: &["13_AnnanKaalam"],
    },
    PointConcept {
        key: "peruchal",
        renderer_ids: &["14_PeruchalVarmam"],
    },
    PointConcept {
        key: "thilardha",
        renderer_ids: &["15_ThilardhaVarmam"],
    },
    PointConcept {
        key: "patchi",
        renderer_ids: &["16_PatchiVarmam"],
    },
    PointConcept {
        key: "naema",
        renderer_ids: &["17_NaemaVarmam"],
    },
    PointConcept {
        key: "kannadi",
        renderer_ids: &["18_KannadiKaalam"],
    },
    PointConcept {
        key: "paala",
        renderer_ids: &["19_PaalaVarmam"],
    },
    PointConcept {
        key: "chundigai",
        renderer_ids: &["20_ChundigaiVarmam"],
    },
    PointConcept {
        key: "minvetti",
        renderer_ids: &["21_Minvetti_L", "21_Minvetti_R"],
    },
    PointConcept {
        key: "manthira",
        renderer_ids: &["22_ManthiraKaalam_L", "22_ManthiraKaalam_R"],
    },
    PointConcept {
        key: "puruva",
        renderer_ids: &["23_Puruva_L", "23_Puruva_R"],
    },
    PointConcept {
        key: "natchathira",
        renderer_ids: &["24_Natchathira_L", "24_Natchathira_R"],
    },
    PointConcept {
        key: "kaamboodhari",
        renderer_ids: &["25_Kaamboodhari_L", "25_Kaamboodhari_R"],
    },
    PointConcept {
        key: "valamoorthi",
        renderer_ids: &["26_ValamoorthiVarmam"],
    },
    PointConcept {
        key: "konasanni",
        renderer_ids: &["27_Konasanni_L1", "27_Konasanni_R1"],
    },
    PointConcept {
        key: "urakka",
        renderer_ids: &["28_UrakkaKaalam_L", "28_UrakkaKaalam_R"],
    },
    PointConcept {
        key: "udhira",
        renderer_ids: &["29_UdhiraKaalam_L", "29_UdhiraKaalam_R"],
    },
    PointConcept {
        key: "ottu",
        renderer_ids: &["30_OttuVarmam"],
    },
    PointConcept {
        key: "sanguthiri",
        renderer_ids: &["31_SanguthiriVarmam"],
    },
    PointConcept {
        key: "sumai",
        renderer_ids: &["32_SumaiVarmam"],
    },
    PointConcept {
        key: "thummi",
        renderer_ids: &["33_ThummiKaalam"],
    },
    PointConcept {
        key: "kathir",
        renderer_ids: &["34_KathirVarmam"],
    },
    PointConcept {
        key: "kathirkaama",
        renderer_ids: &["35_KathirKaamaVarmam"],
    },
    PointConcept {
        key: "buththi",
        renderer_ids: &["36_BuththiVarmam"],
    },
    PointConcept {
        key: "sakthi",
        renderer_ids: &["37_SakthiVarmam"],
    },
    PointConcept {
        key: "koombu",
        renderer_ids: &["38_KoombuVarmam"],
    },
    PointConcept {
        key: "ner",
        renderer_ids: &["39_NerVarmam"],
    },
    PointConcept {
        key: "aananthavayu",
        renderer_ids: &["40_AananthaVayuKaalam"],
    },
    PointConcept {
        key: "panri",
        renderer_ids: &["41_PanriVarmam"],
    },
    PointConcept {
        key: "uthara",
        renderer_ids: &["42_UtharaVarmam"],
    },
    PointConcept {
        key: "anna",
        renderer_ids: &["43_AnnaKaalam"],
    },
    PointConcept {
        key: "thivalai",
        renderer_ids: &["44_ThivalaiVarmam"],
    },
    PointConcept {
        key: "thoosiga",
        renderer_ids: &["45_Thoosiga_L", "45_Thoosiga_R"],
    },
    PointConcept {
        key: "anumar",
        renderer_ids: &["46_Anumar_L", "46_Anumar_R"],
    },
    PointConcept {
        key: "mundellu",
        renderer_ids: &["47_Mundellu_L", "47_Mundellu_R"],
    },
    PointConcept {
        key: "valiyaaththisurukki",
        renderer_ids: &["48_ValiyaAththiSurukki_L", "48_ValiyaAththiSurukki_R"],
    },
    PointConcept {
        key: "siriyaaththisurukki",
        renderer_ids: &["49_SiriyaAththiSurukki_L", "49_SiriyaAththiSurukki_R"],
    },
    PointConcept {
        key: "munsaruthi",
        renderer_ids: &["50_MunSaruthi_L", "50_MunSaruthi_R"],
    },
    PointConcept {
        key: "pallai",
        renderer_ids: &["51_Pallai_L", "51_Pallai_R"],
    },
    PointConcept {
        key: "adappa",
        renderer_ids: &["52_AdappaKaalam_L", "52_AdappaKaalam_R"],
    },
    PointConcept {
        key: "vilangu",
        renderer_ids: &["53_Vilangu_L", "53_Vilangu_R"],
    },
    PointConcept {
        key: "asthikanthari",
        renderer_ids: &["54_Asthikanthari_L", "54_Asthikanthari_R"],
    },
    PointConcept {
        key: "puja",
        renderer_ids: &["55_Puja_L", "55_Puja_R"],
    },
    PointConcept {
        key: "pirathaarai",
        renderer_ids: &["56_Pirathaarai_L", "56_Pirathaarai_R"],
    },
    PointConcept {
        key: "aendhi",
        renderer_ids: &["57_AendhiVarmam_L", "57_AendhiVarmam_R"],
    },
    PointConcept {
        key: "kutthu",
        renderer_ids: &["58_KutthuVarmam_L", "58_KutthuVarmam_R"],
    },
    PointConcept {
        key: "asavu",
        renderer_ids: &["59_AsavuVarmam_L", "59_AsavuVarmam_R"],
    },
    PointConcept {
        key: "koachu",
        renderer_ids: &["60_KoachuVarmam"],
    },
    PointConcept {
        key: "kaimootu",
        renderer_ids: &["61_Kaimootu_L", "61_Kaimootu_R"],
    },
    PointConcept {
        key: "mudakku",
        renderer_ids: &["62_MudakkuVarmam"],
    },
    PointConcept {
        key: "vishamanibantha",
        renderer_ids: &["63_VishaManibantha_L", "63_VishaManibantha_R"],
    },
    PointConcept {
        key: "manibantha",
        renderer_ids: &["64_Manibantha_L", "64_Manibantha_R"],
    },
    PointConcept {
        key: "thuthikkai",
        renderer_ids: &["65_Thuthikkai_L", "65_Thuthikkai_R"],
    },
    PointConcept {
        key: "ullangaivellai",
        renderer_ids: &["66_UllangaiVellaiVarmam_L", "66_UllangaiVellaiVarmam_R"],
    },
    PointConcept {
        key: "aanthai",
        renderer_ids: &["67_AanthaiVarmam_L", "67_AanthaiVarmam_R"],
    },
    PointConcept {
        key: "thatchanai",
        renderer_ids: &["68_ThatchanaiKaalam_L", "68_ThatchanaiKaalam_R"],
    },
];

/// Renderer ids registered for `key`, if the key names a concept.
pub fn renderer_ids_for(key: &str) -> Option<&'static [&'static str]> {
    POINT_TABLE
        .iter()
        .find(|concept| concept.key == key)
        .map(|concept| concept.renderer_ids)
}
