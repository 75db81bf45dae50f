use crate::core::brief::{Block, Brief, BriefSection, Card, Citation, Figure, Finding, PolicyGroup};
use crate::core::bundle::{Axis, BarChart, ChartSpec, Insight, Series, Tone};

use super::{nihcm_march_2025, strings};

const VIOLET: &str = "#7c3aed";
const PURPLE: &str = "#a855f7";
const LILAC: &str = "#c084fc";

/// Perfect representation: panel share equals county Medicaid share.
const PRR_PARITY: f64 = 1.0;

pub fn panel_equity_brief() -> Brief {
    Brief {
        masthead: nihcm_march_2025(),
        topic: "Provider Panel Equity Study".into(),
        subtitle: "Do Primary Care Providers' Medicaid Panels Represent the Communities They \
                   Serve?"
            .into(),
        tags: strings(&[
            "Healthcare Equity",
            "Provider Panels",
            "Panel Representation Ratio",
        ]),
        overview: Finding::new(
            "Study Innovation",
            "First-of-its-kind analysis introducing the Panel Representation Ratio (PRR) metric \
             to measure how well primary care provider Medicaid panels reflect the racial and \
             ethnic diversity of their local communities. Study encompasses 372,320 providers \
             across 44 states using 2019 data.",
        ),
        findings: vec![
            Finding::new(
                "Systematic Representation Disparities:",
                "Non-Hispanic White enrollees are overrepresented in provider panels \
                 (PRR=1.28), while Hispanic enrollees face significant underrepresentation \
                 (PRR=0.82) and Black enrollees are slightly underrepresented (PRR=0.98).",
            ),
            Finding::new(
                "Pediatric Care Excellence:",
                "Pediatricians demonstrate the most equitable panels with 43.4% NHW enrollees, \
                 26.8% Hispanic enrollees, and the only specialty achieving Hispanic \
                 overrepresentation (PRR=1.17).",
            ),
            Finding::new(
                "Community Health Center Leadership:",
                "CHC providers consistently achieve superior representation across all \
                 demographics, with PRRs reaching 1.64 for Black enrollees and 1.37 for \
                 Hispanic enrollees in rural non-HPSA areas.",
            ),
            Finding::new(
                "Urban Equity Challenges:",
                "Urban non-HPSA areas show the greatest disparities with NHW \
                 overrepresentation (PRR=1.32) and significant underrepresentation of both \
                 Black (PRR=0.97) and Hispanic enrollees (PRR=0.81).",
            ),
            Finding::new(
                "Rural Representation Paradox:",
                "Rural areas demonstrate Black enrollee overrepresentation but persistent \
                 Hispanic underrepresentation, suggesting complex geographic and cultural \
                 access patterns.",
            ),
        ],
        sections: vec![
            BriefSection::untitled(vec![
                Block::Explainer {
                    title: "🔍 Understanding the Panel Representation Ratio (PRR)".into(),
                    formula: Finding::new(
                        "PRR Formula:",
                        "(% of racial/ethnic group in provider's panel) ÷ (% of same group in \
                         county Medicaid population)",
                    ),
                    scale: vec![
                        Finding::new("PRR = 1.0", "Perfect representation"),
                        Finding::new("PRR > 1.0", "Overrepresentation"),
                        Finding::new("PRR < 1.0", "Underrepresentation"),
                    ],
                },
                Block::Figures(vec![
                    Figure::new(
                        "Overall Panel Representation Ratios",
                        ChartSpec::Bar(BarChart {
                            labels: strings(&["Non-Hispanic White", "Non-Hispanic Black", "Hispanic"]),
                            series: vec![Series::new(
                                "Panel Representation Ratio (PRR)",
                                &[1.28, 0.98, 0.82],
                                VIOLET,
                            )
                            .with_point_colors(&[VIOLET, PURPLE, LILAC])],
                            axis: Axis::titled("Panel Representation Ratio")
                                .with_max(1.5)
                                .with_reference(PRR_PARITY),
                            stacked: false,
                        }),
                    )
                    .with_caption("Horizontal line at 1.0 indicates perfect representation"),
                    Figure::new(
                        "Hispanic Representation by Provider Type",
                        ChartSpec::Bar(BarChart {
                            labels: strings(&[
                                "Pediatricians",
                                "OB/GYN",
                                "Internal Medicine",
                                "Family Physicians",
                                "NPs",
                                "PAs",
                            ]),
                            series: vec![Series::new(
                                "Hispanic PRR",
                                &[1.17, 0.92, 0.66, 0.77, 0.81, 0.80],
                                PURPLE,
                            )],
                            axis: Axis::titled("Hispanic PRR")
                                .with_max(1.3)
                                .with_reference(PRR_PARITY),
                            stacked: false,
                        }),
                    ),
                ]),
                Block::Insight(Insight::new(
                    Tone::Innovation,
                    "Methodological Innovation: Panel Representation Ratio",
                    "This study introduces the **Panel Representation Ratio (PRR)** as a novel \
                     metric for measuring healthcare equity. Unlike traditional access \
                     measures, PRR reveals whether provider panels truly reflect community \
                     demographics, providing actionable insights for workforce planning and \
                     equity initiatives.",
                )),
                Block::Insight(Insight::new(
                    Tone::Concern,
                    "Hispanic Access Crisis",
                    "With an overall PRR of 0.82, Hispanic Medicaid enrollees face systematic \
                     underrepresentation in primary care panels across nearly all provider \
                     types and geographic areas. This **18% representation gap** indicates \
                     significant barriers to culturally appropriate primary care access.",
                )),
                Block::Insight(Insight::new(
                    Tone::Success,
                    "Community Health Center Excellence",
                    "CHCs demonstrate **exceptional equity leadership** with PRRs consistently \
                     above 1.0 for underrepresented groups. Their success provides a roadmap for \
                     achieving equitable panel composition across all healthcare settings.",
                )),
            ]),
            BriefSection::new(
                "Geographic & Setting Analysis",
                vec![
                    Block::Figures(vec![Figure::new(
                        "Panel Representation by Geographic Setting",
                        ChartSpec::Bar(BarChart {
                            labels: strings(&[
                                "Rural HPSA",
                                "Rural Non-HPSA",
                                "Urban HPSA",
                                "Urban Non-HPSA",
                            ]),
                            series: vec![
                                Series::new("NHW PRR", &[1.04, 1.08, 1.21, 1.32], VIOLET),
                                Series::new("NHB PRR", &[1.28, 1.44, 0.91, 0.97], PURPLE),
                                Series::new("Hispanic PRR", &[1.02, 1.03, 0.80, 0.81], LILAC),
                            ],
                            axis: Axis::titled("Panel Representation Ratio")
                                .with_max(1.6)
                                .with_reference(PRR_PARITY),
                            stacked: false,
                        }),
                    )]),
                    Block::Cards(vec![
                        Card::new(
                            "Rural Areas",
                            &[
                                "Black enrollees: **Overrepresented** (PRR 1.28-1.44)",
                                "Hispanic enrollees: **Near equity** (PRR 1.02-1.03)",
                                "Rural HPSAs show most balanced representation patterns",
                            ],
                        ),
                        Card::new(
                            "Urban Areas",
                            &[
                                "NHW enrollees: **Highly overrepresented** (PRR 1.21-1.32)",
                                "Minority groups: **Underrepresented**",
                                "Greatest disparities in non-HPSA urban areas",
                            ],
                        ),
                        Card::new(
                            "HPSA Impact",
                            &[
                                "22.1% of PCPs practice in HPSAs",
                                "Rural HPSAs: **Better minority representation**",
                                "Urban HPSAs: Mixed representation patterns",
                            ],
                        ),
                    ]),
                ],
            ),
            BriefSection::new(
                "Community Health Center Equity Leadership",
                vec![
                    Block::FigureWithNotes {
                        figure: Figure::new(
                            "CHC vs Non-CHC Provider Panel Representation",
                            ChartSpec::Bar(BarChart {
                                labels: strings(&["CHC Providers", "Non-CHC Providers"]),
                                series: vec![
                                    Series::new("Non-Hispanic Black PRR", &[1.64, 0.94], "#8b5cf6"),
                                    Series::new("Hispanic PRR", &[1.37, 0.81], PURPLE),
                                ],
                                axis: Axis::titled("Panel Representation Ratio")
                                    .with_max(1.8)
                                    .with_reference(PRR_PARITY),
                                stacked: false,
                            }),
                        ),
                        title: "CHC Equity Advantages".into(),
                        notes: vec![
                            Finding::new(
                                "Cultural Responsiveness:",
                                "Bilingual staff and culturally appropriate care models",
                            ),
                            Finding::new(
                                "Mission-Driven Care:",
                                "Explicit commitment to serving underserved populations",
                            ),
                            Finding::new(
                                "Community Integration:",
                                "Deep roots in local communities and trust-building",
                            ),
                            Finding::new(
                                "Comprehensive Services:",
                                "Wraparound services addressing social determinants",
                            ),
                        ],
                    },
                    Block::Cards(vec![
                        Card::new(
                            "Outstanding Performance Metrics",
                            &[
                                "**Black enrollees:** PRR up to 1.64 (64% overrepresentation)",
                                "**Hispanic enrollees:** PRR up to 1.37 (37% overrepresentation)",
                                "Consistent excellence across all geographic settings",
                            ],
                        ),
                        Card::new(
                            "Policy Model Success",
                            &[
                                "Federally mandated to serve **medically underserved areas**",
                                "Board governance includes **community representation**",
                                "Sliding fee scales ensure **economic accessibility**",
                            ],
                        ),
                    ]),
                    Block::Insight(Insight::new(
                        Tone::Highlight,
                        "Scaling CHC Success: Policy Implications",
                        "CHC excellence in achieving equitable panel representation demonstrates \
                         that **intentional equity policies work**. Expanding CHC capacity and \
                         applying CHC principles to other healthcare settings could dramatically \
                         improve representation disparities across the healthcare system.",
                    )),
                ],
            ),
            BriefSection::new(
                "Provider Specialty Equity Analysis",
                vec![Block::Cards(vec![
                    Card::new(
                        "Pediatric Excellence",
                        &[
                            "Most diverse panels: 43.4% NHW, 26.8% Hispanic",
                            "Only specialty with Hispanic PRR >1.0 (1.17)",
                            "Largest panel sizes (626 patients on average)",
                        ],
                    ),
                    Card::new(
                        "OB/GYN Performance",
                        &[
                            "Second most diverse: 46.4% NHW, 21.2% Hispanic",
                            "Strong NHB representation (PRR 1.12)",
                            "Serves pregnancy-focused Medicaid population",
                        ],
                    ),
                    Card::new(
                        "Internal Medicine Challenges",
                        &[
                            "Lowest Hispanic PRR (0.66 - significant underrepresentation)",
                            "Highest NHW overrepresentation (PRR 1.39)",
                            "Critical need for diversity improvement",
                        ],
                    ),
                    Card::new(
                        "Mid-Level Providers",
                        &[
                            "NPs and PAs show similar patterns to Family Medicine",
                            "Hispanic PRR around 0.80-0.81",
                            "Opportunity for enhanced cultural training",
                        ],
                    ),
                ])],
            ),
            BriefSection::new(
                "Policy Implications & Recommendations",
                vec![
                    Block::Policy(vec![
                        PolicyGroup::new(
                            "Medical Education Reform",
                            &[
                                "Integrate PRR methodology into medical school curricula and \
                                 residency training",
                                "Mandate implicit bias training focused on patient panel \
                                 composition impacts",
                                "Develop cultural competency requirements tied to panel \
                                 representation metrics",
                                "Create specialty-specific equity training programs addressing \
                                 documented disparities",
                            ],
                        ),
                        PolicyGroup::new(
                            "Workforce Policy Innovation",
                            &[
                                "Incorporate PRR data into Health Professional Shortage Area \
                                 (HPSA) designations",
                                "Link provider loan forgiveness programs to panel representation \
                                 improvements",
                                "Create equity-focused provider recruitment incentives for \
                                 underrepresented areas",
                                "Establish PRR monitoring requirements for federally funded \
                                 health programs",
                            ],
                        ),
                        PolicyGroup::new(
                            "Community Health Center Expansion",
                            &[
                                "Increase federal funding for CHC capacity expansion in \
                                 high-disparity areas",
                                "Replicate CHC governance and service delivery models in other \
                                 healthcare settings",
                                "Support CHC-led training programs for cultural competency and \
                                 community engagement",
                                "Develop CHC-academic medical center partnerships for \
                                 equity-focused provider training",
                            ],
                        ),
                        PolicyGroup::new(
                            "Transparency & Accountability",
                            &[
                                "Mandate public reporting of provider panel demographic \
                                 composition",
                                "Create PRR report cards for healthcare systems and provider \
                                 networks",
                                "Establish equity performance standards for Medicaid managed \
                                 care contracts",
                                "Develop patient-facing tools showing provider panel diversity \
                                 information",
                            ],
                        ),
                    ]),
                    Block::Insight(Insight::new(
                        Tone::Innovation,
                        "Future Policy Applications",
                        "The Panel Representation Ratio provides a **powerful new tool** for \
                         policymakers to measure and address healthcare equity. Integration of \
                         PRR into quality metrics, funding decisions, and performance \
                         evaluations could drive systematic improvements in equitable care \
                         delivery.",
                    )),
                ],
            ),
        ],
        resources: vec![
            Finding::new(
                "Novel Methodology:",
                "Panel Representation Ratio (PRR) calculated as the percentage of a \
                 racial/ethnic group in a provider's Medicaid panel divided by that group's \
                 percentage in the county Medicaid population.",
            ),
            Finding::new(
                "Data Source:",
                "2019 Transformed Medicaid Statistical Information System (T-MSIS) Analytic \
                 Files (TAF) and National Plan and Provider Enumeration System (NPPES).",
            ),
            Finding::new(
                "Sample:",
                "372,320 primary care providers (physicians, nurse practitioners, and physician \
                 associates) across 44 states with complete panel and demographic data.",
            ),
            Finding::new(
                "Geographic Scope:",
                "Analysis stratified by rurality (USDA Rural-Urban Continuum Codes), Health \
                 Professional Shortage Area designation, and Community Health Center \
                 affiliation.",
            ),
            Finding::new(
                "Quality Measures:",
                "Excluded providers with extremely large (>5,000 patients) or small (<10 \
                 patients) panels, and those with >50% missing race/ethnicity data.",
            ),
        ],
        citation: Citation {
            text: "Healthcare, 2025.".into(),
            doi: Some("10.3390/healthcare13162062".into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prr_charts_draw_the_parity_line() {
        let brief = panel_equity_brief();
        let with_reference = brief
            .figures()
            .filter(|figure| match &figure.chart {
                ChartSpec::Bar(bar) => bar.axis.reference == Some(PRR_PARITY),
                _ => false,
            })
            .count();
        assert_eq!(with_reference, 4);
    }
}
