//! Static template tables for each profile and marker.
//!
//! Profiles are a pure lookup: v2 replaces the prompt wording with a cited
//! version and shares every other field with v1.

use hemaflag_model::{DiseaseDescriptor, Marker, MarkerTemplate, Priority, Profile, Reference};

const AWBC_DISEASE: DiseaseDescriptor = DiseaseDescriptor {
    name: "血液系统异常风险（需排除白血病/骨髓增生性疾病）",
    probability: "中等",
    analysis: "AWBC↑提示存在异常白细胞群或未分类细胞成分增多，需结合血涂片或进一步检查排除血液系统异常。",
    priority: Priority::Normal,
    keywords: &["AWBC", "异常白细胞"],
};

const SRBC_DISEASE: DiseaseDescriptor = DiseaseDescriptor {
    name: "镰刀型细胞贫血/携带者状态",
    probability: "较高",
    analysis: "SRBC↑提示红细胞形态异常，需排查镰刀型细胞贫血或携带者状态，结合HGB/RET%等指标评估溶血程度。",
    priority: Priority::High,
    keywords: &["SRBC", "镰刀"],
};

const AWBC_SHORT: &str = "AWBC↑提示异常白细胞风险";
const AWBC_INTERPRETATION: &str =
    "AWBC为异常白细胞计数，升高提示异常细胞成分增多，需结合感染/炎症或血液系统异常进一步评估。";
const SRBC_SHORT: &str = "SRBC↑提示镰刀型细胞贫血风险";
const SRBC_INTERPRETATION: &str =
    "SRBC升高提示镰刀型红细胞存在，需结合溶血指标与病史评估镰刀型细胞贫血或携带者状态。";
const SRBC_BASIS: &str =
    "SRBC为镰刀型红细胞识别计数，升高提示红细胞形态异常，常见于镰刀型细胞贫血或携带者。";

pub static AWBC_V1: MarkerTemplate = MarkerTemplate {
    marker: Marker::Awbc,
    prompt: "AWBC↑提示存在异常白细胞群或异常细胞成分增多，需结合血涂片及临床情况评估感染、炎症或血液系统异常。",
    basis: "AWBC为机器学习识别的异常白细胞计数，升高提示异常细胞聚集或未分类白细胞成分增加，建议复查或人工镜检。",
    short: AWBC_SHORT,
    interpretation: AWBC_INTERPRETATION,
    disease: AWBC_DISEASE,
};

pub static SRBC_V1: MarkerTemplate = MarkerTemplate {
    marker: Marker::Srbc,
    prompt: "SRBC↑提示镰刀型红细胞存在，需考虑镰刀型细胞贫血风险或携带者状态。",
    basis: SRBC_BASIS,
    short: SRBC_SHORT,
    interpretation: SRBC_INTERPRETATION,
    disease: SRBC_DISEASE,
};

pub static AWBC_V2: MarkerTemplate = MarkerTemplate {
    marker: Marker::Awbc,
    prompt: "检测到白细胞AWBC指标升高异常，多见于：炎症/感染相关的毒性改变或异常形态细胞 [13][14]，\
             外周血异常/幼稚细胞增多或血液系统异常线索 [9][12]，需进行涂片复核与异常形态确认 [10][11]。\
             请医生查看细胞图片，建议进一步询问感染症状/近期用药史，或做外周血涂片复核与人工分类排查 [10][11]。",
    basis: "AWBC为异常白细胞计数，升高提示异常细胞聚集或未分类白细胞成分增加，建议复查或人工镜检。",
    short: AWBC_SHORT,
    interpretation: AWBC_INTERPRETATION,
    disease: AWBC_DISEASE,
};

pub static SRBC_V2: MarkerTemplate = MarkerTemplate {
    marker: Marker::Srbc,
    prompt: "检测到红细胞SRBC指标升高异常，多见于：镰刀型细胞贫血或携带者状态 [15][16]，\
             或镰刀红细胞形态提示 [18]。请医生查看细胞图片，建议进一步询问家族史/贫血相关症状，\
             或做血红蛋白电泳/HPLC/基因检测 [15][17][19] 排查。",
    basis: SRBC_BASIS,
    short: SRBC_SHORT,
    interpretation: SRBC_INTERPRETATION,
    disease: SRBC_DISEASE,
};

/// Literature the v2 citation markers point to.
pub static V2_REFERENCES: [Reference; 11] = [
    Reference {
        number: 9,
        marker: Marker::Awbc,
        citation: "Palmer L, et al. ICSH recommendations for the standardization of nomenclature and grading of peripheral blood cell morphological features. Int J Lab Hematol. 2015.",
    },
    Reference {
        number: 10,
        marker: Marker::Awbc,
        citation: "ISLH. Consensus rules for blood smear review / positive smear findings definitions.",
    },
    Reference {
        number: 11,
        marker: Marker::Awbc,
        citation: "CLSI. H20: Reference Leukocyte (WBC) Differential Count and Evaluation of Instrumental Methods.",
    },
    Reference {
        number: 12,
        marker: Marker::Awbc,
        citation: "Tripathi AK, et al. Laboratory Evaluation of Acute Leukemia. StatPearls. 2025.",
    },
    Reference {
        number: 13,
        marker: Marker::Awbc,
        citation: "Lynch EC. Peripheral Blood Smear. Clinical Methods (NCBI Bookshelf). 1990.",
    },
    Reference {
        number: 14,
        marker: Marker::Awbc,
        citation: "Al-Gwaiz LA, et al. The diagnostic value of toxic granulation in predicting bacterial infections. 2007.",
    },
    Reference {
        number: 15,
        marker: Marker::Srbc,
        citation: "NHLBI (NIH). Sickle Cell Disease – Diagnosis. 2024.",
    },
    Reference {
        number: 16,
        marker: Marker::Srbc,
        citation: "NHLBI. Evidence-Based Management of Sickle Cell Disease (Guideline/Report).",
    },
    Reference {
        number: 17,
        marker: Marker::Srbc,
        citation: "American Society of Hematology. Hemoglobin Electrophoresis in Sickle Cell Disease.",
    },
    Reference {
        number: 18,
        marker: Marker::Srbc,
        citation: "Palmer L, et al. ICSH morphology recommendations. 2015.",
    },
    Reference {
        number: 19,
        marker: Marker::Srbc,
        citation: "National Academies. Protocols for screening should use hemoglobin electrophoresis or reliable separation methods.",
    },
];

/// Template for `marker` under `profile`.
pub fn template(profile: Profile, marker: Marker) -> &'static MarkerTemplate {
    match (profile, marker) {
        (Profile::V1, Marker::Awbc) => &AWBC_V1,
        (Profile::V1, Marker::Srbc) => &SRBC_V1,
        (Profile::V2, Marker::Awbc) => &AWBC_V2,
        (Profile::V2, Marker::Srbc) => &SRBC_V2,
    }
}

/// References cited by `profile`'s wording (empty for v1).
pub fn references(profile: Profile) -> &'static [Reference] {
    match profile {
        Profile::V1 => &[],
        Profile::V2 => &V2_REFERENCES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_text_carries_a_keyword() {
        for profile in [Profile::V1, Profile::V2] {
            for marker in Marker::ALL {
                let tpl = template(profile, marker);
                assert_eq!(tpl.marker, marker);
                for text in [tpl.prompt, tpl.short, tpl.interpretation] {
                    assert!(
                        tpl.keywords().iter().any(|keyword| text.contains(keyword)),
                        "{profile}/{marker}: {text}"
                    );
                }
            }
        }
    }

    #[test]
    fn srbc_outranks_awbc() {
        assert_eq!(template(Profile::V1, Marker::Srbc).disease.priority, Priority::High);
        assert_eq!(template(Profile::V2, Marker::Awbc).disease.priority, Priority::Normal);
    }

    #[test]
    fn v2_prompts_cite_listed_references() {
        for marker in Marker::ALL {
            let prompt = template(Profile::V2, marker).prompt;
            for reference in references(Profile::V2).iter().filter(|r| r.marker == marker) {
                assert!(prompt.contains(&format!("[{}]", reference.number)));
            }
        }
        assert!(references(Profile::V1).is_empty());
    }

    #[test]
    fn v2_prompt_continuation_has_no_stray_indent() {
        assert!(!template(Profile::V2, Marker::Awbc).prompt.contains("  "));
    }
}
