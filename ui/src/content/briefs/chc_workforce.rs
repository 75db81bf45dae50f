use crate::core::brief::{Block, Brief, BriefSection, Card, Citation, Figure, Finding, PolicyGroup};
use crate::core::bundle::{Axis, BarChart, ChartSpec, Insight, LineChart, Series, Tone};

use super::{nihcm_march_2025, strings};

const TEAL: &str = "#14b8a6";
const TEAL_DARK: &str = "#0d9488";

const TELEHEALTH_MONTHS: [&str; 15] = [
    "Jan 2020", "Feb 2020", "Mar 2020", "Apr 2020", "May 2020", "Jun 2020", "Jul 2020",
    "Aug 2020", "Sep 2020", "Oct 2020", "Nov 2020", "Dec 2020", "Jan 2021", "Feb 2021",
    "Mar 2021",
];

pub fn chc_workforce_brief() -> Brief {
    Brief {
        masthead: nihcm_march_2025(),
        topic: "CHC Perinatal Workforce Growth".into(),
        subtitle: "Community Health Center Workforce Serving Pregnant and Postpartum Medicaid \
                   Enrollees 2016-2021"
            .into(),
        tags: strings(&[
            "Maternal Health",
            "Community Health Centers",
            "Workforce Development",
        ]),
        overview: Finding::new(
            "Study Overview",
            "Comprehensive analysis of the workforce serving pregnant and postpartum Medicaid \
             enrollees across 1,280 Community Health Centers in 28 states plus DC from \
             2016-2021. This study reveals significant workforce growth patterns and the \
             evolving role of different healthcare professionals in perinatal care delivery at \
             safety-net facilities.",
        ),
        findings: vec![
            Finding::new(
                "Substantial Workforce Growth:",
                "23% increase in providers serving pregnant Medicaid enrollees (22,027→28,668) \
                 and 20% growth for postpartum care (25,655→32,026), demonstrating CHC capacity \
                 expansion during the study period.",
            ),
            Finding::new(
                "Nurse Practitioner Leadership:",
                "NPs showed the fastest growth rate at 31% for prenatal and 27% for postpartum \
                 care, significantly outpacing family physicians (17%) and becoming critical to \
                 CHC perinatal workforce expansion.",
            ),
            Finding::new(
                "OBGYN Specialist Concerns:",
                "OBGYN and PA numbers remained relatively stable during the study period, \
                 raising concerns about specialist availability for high-risk pregnancies and \
                 complex perinatal care needs.",
            ),
            Finding::new(
                "Telehealth Integration Success:",
                "Dramatic surge in telehealth providers during COVID-19 (peak: 5,200 for \
                 prenatal, 6,500 for postpartum), with sustained adoption demonstrating \
                 viability for ongoing perinatal care delivery.",
            ),
            Finding::new(
                "Patient Volume Differentials:",
                "OBGYNs maintain highest patient volumes (140 pregnant enrollees per provider) \
                 compared to FPs (30), NPs (20), and PAs (10), highlighting productivity and \
                 specialization patterns.",
            ),
        ],
        sections: vec![
            BriefSection::untitled(vec![
                Block::Figures(vec![
                    Figure::new(
                        "CHC Workforce Growth (2016-2021)",
                        ChartSpec::Bar(BarChart {
                            labels: strings(&["2016", "2017", "2018", "2019", "2020", "2021"]),
                            series: vec![
                                Series::sparse(
                                    "Pregnant Enrollees Workforce",
                                    &[
                                        Some(22_027.0),
                                        Some(23_905.0),
                                        Some(26_914.0),
                                        Some(28_964.0),
                                        Some(28_668.0),
                                        None,
                                    ],
                                    TEAL,
                                ),
                                Series::sparse(
                                    "Postpartum Enrollees Workforce",
                                    &[
                                        None,
                                        Some(25_655.0),
                                        Some(28_444.0),
                                        Some(30_609.0),
                                        Some(30_554.0),
                                        Some(32_026.0),
                                    ],
                                    TEAL_DARK,
                                ),
                            ],
                            axis: Axis::titled("Number of Providers"),
                            stacked: false,
                        }),
                    ),
                    Figure::new(
                        "Provider Type Growth Rates",
                        ChartSpec::Bar(BarChart {
                            labels: strings(&[
                                "Nurse Practitioners",
                                "Family Physicians",
                                "OBGYNs",
                                "Physician Associates",
                            ]),
                            series: vec![Series::new(
                                "Growth Rate (%)",
                                &[31.0, 17.0, 2.0, 1.0],
                                TEAL,
                            )
                            .with_point_colors(&[TEAL, TEAL_DARK, "#0f766e", "#134e4a"])],
                            axis: Axis::titled("Growth Rate (%)")
                                .with_max(35.0)
                                .with_suffix("%"),
                            stacked: false,
                        }),
                    ),
                ]),
                Block::Insight(Insight::new(
                    Tone::Success,
                    "CHC Perinatal Care Capacity",
                    "CHCs serve **~560,000 individuals** with perinatal care annually, \
                     representing nearly 1 in 6 Medicaid enrollees. With Medicaid covering 41% \
                     of all U.S. childbirths, this workforce growth directly impacts maternal \
                     health access for the nation's most vulnerable populations.",
                )),
                Block::Insight(Insight::new(
                    Tone::Warning,
                    "OBGYN Specialist Shortage",
                    "The lack of significant OBGYN growth is concerning given HRSA projections \
                     of **significant specialist shortages by 2030**. This pattern may limit CHC \
                     capacity to manage high-risk pregnancies and provide comprehensive \
                     obstetric services in underserved communities.",
                )),
                Block::Insight(Insight::new(
                    Tone::Highlight,
                    "Integrated Care Team Approach",
                    "Growth in non-traditional perinatal providers (dentists, social workers, \
                     counselors) confirms CHCs' **comprehensive, team-based approach** to \
                     addressing the multifaceted needs of expectant mothers, supporting both \
                     medical and social determinants of health.",
                )),
            ]),
            BriefSection::new(
                "Telehealth Transformation",
                vec![
                    Block::Figures(vec![Figure::new(
                        "COVID-19 Telehealth Adoption Timeline",
                        ChartSpec::Line(LineChart {
                            labels: strings(&TELEHEALTH_MONTHS),
                            series: vec![
                                Series::new(
                                    "Pregnant Care Providers",
                                    &[
                                        800.0, 850.0, 2400.0, 5200.0, 4800.0, 4200.0, 3800.0,
                                        3500.0, 3400.0, 3600.0, 4200.0, 5000.0, 4800.0, 4600.0,
                                        4500.0,
                                    ],
                                    TEAL,
                                ),
                                Series::new(
                                    "Postpartum Care Providers",
                                    &[
                                        1200.0, 1300.0, 3000.0, 6500.0, 6000.0, 5200.0, 4800.0,
                                        4400.0, 4200.0, 4500.0, 5200.0, 6000.0, 5800.0, 5500.0,
                                        5300.0,
                                    ],
                                    TEAL_DARK,
                                ),
                            ],
                            axis: Axis::titled("Number of Providers Using Telehealth"),
                            fill: true,
                        }),
                    )]),
                    Block::Cards(vec![
                        Card::new(
                            "Rapid Telehealth Scaling",
                            &[
                                "**6.5x increase** in telehealth providers within 2 months",
                                "Peak utilization: **April 2020** during initial COVID surge",
                                "Sustained adoption at **5,000+ providers** through 2021",
                            ],
                        ),
                        Card::new(
                            "Care Continuity Benefits",
                            &[
                                "Maintained access during **lockdown periods**",
                                "Enabled **behavioral health integration** for postpartum care",
                                "Reduced barriers for **rural and underserved** patients",
                            ],
                        ),
                        Card::new(
                            "Future Integration",
                            &[
                                "Baseline established for **hybrid care models**",
                                "Critical for **postpartum mental health** services",
                                "Platform for **extended coverage** implementation",
                            ],
                        ),
                    ]),
                ],
            ),
            BriefSection::new(
                "Provider Productivity & Specialization",
                vec![
                    Block::FigureWithNotes {
                        figure: Figure::new(
                            "Average Patient Volume per Provider",
                            ChartSpec::Bar(BarChart {
                                labels: strings(&[
                                    "OBGYNs",
                                    "Family Physicians",
                                    "Nurse Practitioners",
                                    "Physician Associates",
                                ]),
                                series: vec![Series::new(
                                    "Average Patients per Provider",
                                    &[140.0, 30.0, 20.0, 10.0],
                                    "#0f766e",
                                )
                                .with_point_colors(&["#0f766e", TEAL, TEAL_DARK, "#0a5d56"])],
                                axis: Axis::titled("Patients per Provider"),
                                stacked: false,
                            }),
                        ),
                        title: "Workforce Productivity Insights".into(),
                        notes: vec![
                            Finding::new(
                                "Specialist Efficiency:",
                                "OBGYNs serve 4.7x more patients than FPs, reflecting \
                                 specialized training and focused perinatal practice patterns.",
                            ),
                            Finding::new(
                                "Primary Care Integration:",
                                "FPs and NPs provide foundational prenatal care, with NPs \
                                 showing rapid workforce expansion to meet growing demand.",
                            ),
                            Finding::new(
                                "Team-Based Approach:",
                                "PAs complement physician care with lower but consistent \
                                 patient volumes, supporting comprehensive service delivery.",
                            ),
                        ],
                    },
                    Block::Insight(Insight::new(
                        Tone::Concern,
                        "Workforce Sustainability Concerns",
                        "While overall workforce growth is positive, the **stagnant OBGYN \
                         numbers** combined with projected national shortages could create \
                         bottlenecks for complex perinatal care. Strategic investments in \
                         specialist recruitment and retention are essential for maintaining CHC \
                         service comprehensiveness.",
                    )),
                ],
            ),
            BriefSection::new(
                "Policy Implications & Future Directions",
                vec![Block::Policy(vec![
                    PolicyGroup::new(
                        "Workforce Development Priorities",
                        &[
                            "Targeted OBGYN recruitment and retention incentives for CHC \
                             settings",
                            "Nurse practitioner training program expansion with perinatal \
                             specialization tracks",
                            "Family physician obstetric skills maintenance and continuing \
                             education support",
                            "Physician assistant perinatal care competency development programs",
                        ],
                    ),
                    PolicyGroup::new(
                        "Extended Coverage Implementation",
                        &[
                            "Workforce planning for 12-month postpartum Medicaid coverage \
                             expansion",
                            "Behavioral health specialist integration for comprehensive \
                             postpartum care",
                            "Telehealth infrastructure investment to sustain remote care \
                             capabilities",
                            "Care coordination protocols for extended enrollment periods",
                        ],
                    ),
                    PolicyGroup::new(
                        "Transforming Maternal Health (TMaH) Model Integration",
                        &[
                            "Doula and midwife integration pathways within CHC workforce models",
                            "Medicaid reimbursement framework development for expanded provider \
                             types",
                            "Rural CHC partnership strategies for comprehensive maternity \
                             services",
                            "Community health worker training for perinatal care support roles",
                        ],
                    ),
                ])],
            ),
        ],
        resources: vec![
            Finding::new(
                "Data Source:",
                "Transformed Medicaid Statistical Information System (T-MSIS) Analytical File \
                 (TAF) and National Plan and Provider Enumeration System (NPPES), 2016-2021.",
            ),
            Finding::new(
                "Sample:",
                "1,280 Community Health Centers across 28 states plus DC with complete \
                 workforce and enrollment data throughout the study period.",
            ),
            Finding::new(
                "Study Design:",
                "Longitudinal workforce analysis using CHC-specific provider identifiers and \
                 Medicaid claims data for pregnant and postpartum enrollee care.",
            ),
            Finding::new(
                "Key Metrics:",
                "Annual provider counts by specialty, patient volume per provider, telehealth \
                 utilization patterns, and workforce growth rates by provider type.",
            ),
        ],
        citation: Citation {
            text: "Journal of Primary Care & Community Health, 2025.".into(),
            doi: None,
        },
    }
}
