use crate::core::brief::{
    Block, Brief, BriefSection, Card, Citation, Figure, Finding, PolicyGroup,
};
use crate::core::bundle::{Axis, BarChart, ChartSpec, DoughnutChart, Insight, Series, Slice, Tone};

use super::{nihcm_march_2025, strings};

pub fn participation_brief() -> Brief {
    Brief {
        masthead: nihcm_march_2025(),
        topic: "Medicaid Provider Participation Patterns".into(),
        subtitle: "Primary Care Clinician Participation Tracking 2016-2019".into(),
        tags: strings(&["Health Care Coverage", "Provider Networks", "Access to Care"]),
        overview: Finding::new(
            "Study Overview",
            "Comprehensive analysis of 220,665 primary care clinicians across 40 states, \
             tracking Medicaid participation patterns from 2016-2019. This study reveals \
             significant provider volatility that impacts patient access and care continuity.",
        ),
        findings: vec![
            Finding::new(
                "Provider Stability Crisis:",
                "Only 60% of primary care clinicians maintained stable Medicaid participation \
                 over the study period, indicating widespread volatility in provider networks.",
            ),
            Finding::new(
                "Significant Growth Patterns:",
                "20% of providers experienced major increases in Medicaid patient volume, \
                 suggesting capacity expansion in select practices.",
            ),
            Finding::new(
                "Access Disruption Concerns:",
                "20% showed significant decreases in participation, potentially disrupting \
                 care for thousands of Medicaid beneficiaries.",
            ),
            Finding::new(
                "Specialty Variations:",
                "Pediatrics (70% stable) and OB/GYN (68% stable) showed higher stability than \
                 nurse practitioners and physician assistants (52% stable).",
            ),
            Finding::new(
                "Geographic Disparities:",
                "Rural areas and non-expansion states experienced higher rates of provider \
                 volatility and access challenges.",
            ),
        ],
        sections: vec![
            BriefSection::untitled(vec![
                Block::Figures(vec![
                    Figure::new(
                        "Provider Participation Patterns (2016-2019)",
                        ChartSpec::Doughnut(DoughnutChart {
                            slices: vec![
                                Slice::new("Stable Participation", 60.0, "#3b82f6"),
                                Slice::new("Major Increases", 20.0, "#10b981"),
                                Slice::new("Major Decreases", 20.0, "#ef4444"),
                            ],
                            value_suffix: "%".into(),
                        }),
                    ),
                    Figure::new(
                        "Stability by Provider Type",
                        ChartSpec::Bar(BarChart {
                            labels: strings(&[
                                "Family Medicine",
                                "Internal Medicine",
                                "NPs",
                                "PAs",
                                "OB/GYN",
                                "Pediatrics",
                            ]),
                            series: vec![Series::new(
                                "Stability Rate (%)",
                                &[67.0, 64.0, 52.0, 52.0, 68.0, 70.0],
                                "#1e40af",
                            )
                            .with_point_colors(&[
                                "#1e40af", "#3b82f6", "#6366f1", "#8b5cf6", "#a855f7", "#c084fc",
                            ])],
                            axis: Axis::titled("Stability Rate (%)").with_max(80.0),
                            stacked: false,
                        }),
                    ),
                ]),
                Block::Insight(Insight::new(
                    Tone::Success,
                    "Community Health Center Advantage",
                    "CHC-affiliated providers demonstrated **significantly higher stability** \
                     compared to non-CHC providers, suggesting that institutional support and \
                     mission-driven care models enhance provider retention and reduce \
                     participation volatility.",
                )),
                Block::Insight(Insight::new(
                    Tone::Warning,
                    "Rural Access Challenges",
                    "Rural areas show **higher volatility rates** and greater susceptibility to \
                     access disruptions. Provider shortages in rural regions compound the impact \
                     of participation changes, creating critical access vulnerabilities for \
                     Medicaid beneficiaries.",
                )),
                Block::Insight(Insight::new(
                    Tone::Highlight,
                    "Medicaid Expansion Impact",
                    "The study examined the impact of Medicaid expansion on provider \
                     participation patterns. State Medicaid policy decisions appear to influence \
                     provider participation and network adequacy, though specific quantitative \
                     impacts varied across states.",
                )),
            ]),
            BriefSection::new(
                "Geographic Analysis",
                vec![Block::Insight(Insight::new(
                    Tone::Warning,
                    "Geographic Disparities",
                    "The study found significant state-level variations in provider \
                     participation stability. Non-expansion states and rural areas experienced \
                     higher rates of provider volatility, facing additional challenges from \
                     provider shortages and limited practice infrastructure.",
                ))],
            ),
            BriefSection::new(
                "Health Care System Impact",
                vec![
                    Block::Cards(vec![
                        Card::new(
                            "Patient Access Disruption",
                            &[
                                "Significant numbers of **Medicaid beneficiaries** experienced \
                                 provider changes during the study period",
                                "Provider exits required **patient reassignments** disrupting \
                                 continuity of care",
                                "Access disruptions particularly impact **vulnerable \
                                 populations** with chronic conditions",
                            ],
                        ),
                        Card::new(
                            "Network Adequacy Challenges",
                            &[
                                "Provider volatility impacts **network adequacy standards** \
                                 compliance",
                                "**Rural areas** face greater challenges maintaining adequate \
                                 provider networks",
                                "Managed care organizations must **continuously rebuild** \
                                 networks in high-volatility regions",
                            ],
                        ),
                        Card::new(
                            "Financial Implications",
                            &[
                                "Provider volatility increases **administrative costs** for \
                                 health systems",
                                "Disrupted care continuity may lead to increased **emergency \
                                 department utilization**",
                                "Healthcare systems face significant **recruitment and \
                                 retention costs**",
                            ],
                        ),
                    ]),
                    Block::Insight(Insight::new(
                        Tone::Highlight,
                        "Quality of Care Impacts",
                        "Provider volatility impacts **care continuity** which is essential for \
                         managing chronic conditions. Patients in high-volatility areas may \
                         experience increased rates of preventable hospitalizations and \
                         challenges in chronic disease management.",
                    )),
                ],
            ),
            BriefSection::new(
                "Provider Perspective & Methodology",
                vec![
                    Block::Prose {
                        title: "Study Design & Data Sources".into(),
                        paragraphs: vec![
                            Finding::new(
                                "Longitudinal Analysis:",
                                "4-year tracking (2016-2019) using Transformed Medicaid \
                                 Statistical Information System (T-MSIS) Analytic Files and \
                                 National Plan and Provider Enumeration System (NPPES) data.",
                            ),
                            Finding::new(
                                "Sample:",
                                "220,665 primary care clinicians across 40 states representing \
                                 85% of the US population, with complete enrollment and practice \
                                 characteristic data.",
                            ),
                            Finding::new(
                                "Outcome Definition:",
                                "Participation changes categorized using 90% threshold \
                                 methodology - major increases/decreases defined as >90% change \
                                 from baseline patient volume.",
                            ),
                        ],
                    },
                    Block::Callout {
                        tone: Tone::Success,
                        title: "Key Provider Factors".into(),
                        items: vec![
                            Finding::new(
                                "Baseline Volume:",
                                "Higher baseline enrollee volume strongly associated with \
                                 greater stability",
                            ),
                            Finding::new(
                                "Institutional Affiliation:",
                                "CHC-affiliated providers show significantly higher stability \
                                 than non-CHC providers",
                            ),
                            Finding::new(
                                "Specialty Differences:",
                                "Pediatrics and OB/GYN demonstrate higher stability rates than \
                                 other specialties",
                            ),
                            Finding::new(
                                "Geographic Location:",
                                "Rural practice settings associated with higher odds of major \
                                 decreases",
                            ),
                            Finding::new(
                                "Gender:",
                                "Female providers showed varied patterns depending on specialty",
                            ),
                        ],
                    },
                    Block::Callout {
                        tone: Tone::Warning,
                        title: "Provider-Reported Challenges".into(),
                        items: vec![
                            Finding::new(
                                "Reimbursement Rates:",
                                "Average 23% below Medicare rates, 45% below commercial \
                                 insurance",
                            ),
                            Finding::new(
                                "Administrative Burden:",
                                "Prior authorization requirements 3x higher than Medicare",
                            ),
                            Finding::new(
                                "Payment Delays:",
                                "40% of claims processed beyond 30-day standard",
                            ),
                            Finding::new(
                                "Documentation Requirements:",
                                "Medicaid-specific forms average 15 minutes additional per visit",
                            ),
                            Finding::new(
                                "Network Restrictions:",
                                "Limited referral networks affect care coordination capabilities",
                            ),
                        ],
                    },
                ],
            ),
            BriefSection::new(
                "Policy Implications",
                vec![Block::Policy(vec![
                    PolicyGroup::new(
                        "Provider Retention Strategies",
                        &[
                            "Enhanced reimbursement rates to reduce financial barriers to \
                             Medicaid participation",
                            "Administrative burden reduction through streamlined billing and \
                             prior authorization processes",
                            "Targeted support for high-volume providers to maintain network \
                             stability",
                        ],
                    ),
                    PolicyGroup::new(
                        "Access Continuity Measures",
                        &[
                            "Real-time provider participation monitoring systems for early \
                             intervention",
                            "Patient notification protocols for provider network changes",
                            "Care transition support for beneficiaries affected by provider exits",
                        ],
                    ),
                    PolicyGroup::new(
                        "State Policy Recommendations",
                        &[
                            "Medicaid expansion adoption to improve provider participation rates",
                            "Investment in Community Health Centers as stable access points",
                            "Rural provider incentive programs to address geographic disparities",
                            "Provider loan forgiveness programs linked to Medicaid participation \
                             commitments",
                        ],
                    ),
                ])],
            ),
        ],
        resources: vec![
            Finding::new(
                "Study Design:",
                "Longitudinal analysis using Transformed Medicaid Statistical Information System \
                 (T-MSIS) Analytic Files and National Plan and Provider Enumeration System \
                 (NPPES) from 2016-2019.",
            ),
            Finding::new(
                "Sample:",
                "220,665 primary care clinicians across 40 states with complete participation \
                 data.",
            ),
            Finding::new(
                "Key Metrics:",
                "Major increase (>90% volume growth), Major decrease (>90% volume decline), \
                 Stable participation (within 90% threshold).",
            ),
        ],
        citation: Citation {
            text: "Bodas, M., Luo, Q., Vichare, A. \"Tracking Changes in Primary Care \
                   Clinicians' Medicaid Participation Using Novel Methods.\" International \
                   Journal of Environmental Research and Public Health, 2025, 22, 1339."
                .into(),
            doi: Some("10.3390/ijerph22091339".into()),
        },
    }
}
