use crate::components::layout::Layout;
use leptos::*;

const CONTACT_EMAIL: &str = "support@mohchatbot.com";

struct Section {
    heading: &'static str,
    intro: Option<&'static str>,
    items: &'static [(&'static str, &'static str)],
}

struct Document {
    title: &'static str,
    lead: &'static str,
    sections: &'static [Section],
    contact: &'static str,
}

const PRIVACY_POLICY: Document = Document {
    title: "Privacy Policy",
    lead: "Welcome to Madina Health Bot! Your privacy is critically important to us. This Privacy Policy explains how we collect, use, and protect your information when you interact with our chatbot. By using our services, you agree to the terms outlined in this document.",
    sections: &[
        Section {
            heading: "Information We Collect",
            intro: None,
            items: &[
                ("Personal Information", "Includes your name, contact details, and any information you provide during interactions."),
                ("Health Information", "General health-related data, such as symptoms or medical preferences."),
                ("Appointment Details", "Data related to booking, rescheduling, or canceling appointments."),
                ("Feedback", "Ratings and comments to improve our service quality."),
            ],
        },
        Section {
            heading: "How We Use Your Information",
            intro: None,
            items: &[
                ("Appointment Management", "To assist in booking, rescheduling, or canceling appointments."),
                ("Health Information Sharing", "To provide general health tips, FAQs, and multilingual responses."),
                ("Emergency Assistance", "To connect users with emergency contacts or notify hospital teams when necessary."),
                ("Feedback Collection", "To gather user feedback for service improvement."),
                ("Escalation to Human Support", "For unresolved or complex queries requiring human intervention."),
            ],
        },
        Section {
            heading: "Data Security",
            intro: Some("We are committed to protecting your data. Measures we take include:"),
            items: &[
                ("", "Adhering to regulations like HIPAA to handle sensitive health information securely."),
                ("", "Employing encryption to safeguard data during storage and transmission."),
                ("", "Restricting access to authorized personnel only."),
            ],
        },
        Section {
            heading: "Third-Party Integrations",
            intro: Some("Madina Health Bot integrates with third-party systems for better service delivery. These include:"),
            items: &[
                ("Hospital Databases", "For managing appointment schedules and doctor availability."),
                ("SMS/Email Services", "For sending notifications and updates."),
                ("APIs", "To securely retrieve and manage patient information."),
            ],
        },
        Section {
            heading: "Compliance with Regulations",
            intro: Some("We comply with applicable healthcare data protection laws, such as HIPAA, ensuring that your information is handled responsibly and securely."),
            items: &[],
        },
        Section {
            heading: "Changes to This Privacy Policy",
            intro: Some("We may update this Privacy Policy periodically. Changes will be posted on this page, and your continued use of our services constitutes acceptance of the updated terms."),
            items: &[],
        },
    ],
    contact: "If you have any questions or concerns about this Privacy Policy, please contact us at:",
};

const TERMS: Document = Document {
    title: "Terms and Conditions",
    lead: "Welcome to Madina Health Bot! These Terms and Conditions outline the rules and guidelines for using our services. By accessing or using Madina Health Bot, you agree to be bound by these terms. If you disagree with any part of these terms, you should discontinue using our chatbot immediately.",
    sections: &[
        Section {
            heading: "Use of Services",
            intro: None,
            items: &[
                ("Purpose of the Chatbot", "Madina Health Bot is designed to provide healthcare assistance, including managing appointments, delivering health-related information, and offering emergency contact support. It is not a substitute for professional medical advice, diagnosis, or treatment."),
                ("Permitted Usage", "You may use the chatbot for lawful purposes only. You must not misuse the chatbot, disrupt its operations, or attempt unauthorized access."),
                ("Limitations", "The chatbot provides general health tips and information but does not offer personalized medical advice. Users are advised to consult with qualified healthcare professionals for specific medical concerns."),
            ],
        },
        Section {
            heading: "User Responsibilities",
            intro: None,
            items: &[
                ("Accuracy of Information", "You are responsible for providing accurate and complete information during interactions with the chatbot. Misrepresentation of information may lead to incorrect outcomes or restricted access."),
                ("Security", "Users must safeguard their login credentials (if applicable) and notify us immediately of any unauthorized access or breaches."),
                ("Feedback and Communication", "Feedback provided by users must be respectful and constructive. Misuse of feedback channels may result in service restrictions."),
            ],
        },
        Section {
            heading: "Intellectual Property",
            intro: None,
            items: &[
                ("Ownership", "All content, features, and functionality of Madina Health Bot, including text, graphics, software, and design, are the exclusive property of Madina Health."),
                ("Restrictions", "Users may not copy, modify, distribute, or reverse-engineer any part of the chatbot or related services."),
            ],
        },
        Section {
            heading: "Limitation of Liability",
            intro: None,
            items: &[
                ("General Liability", "Madina Health Bot and its creators are not liable for any direct, indirect, incidental, or consequential damages arising from the use of the chatbot."),
                ("Service Interruptions", "We are not responsible for interruptions, errors, or data loss resulting from technical issues or third-party integrations."),
            ],
        },
        Section {
            heading: "Termination of Access",
            intro: Some("We reserve the right to suspend or terminate user access to Madina Health Bot at any time, without notice, for violating these terms or engaging in activities that harm the service or its users."),
            items: &[],
        },
        Section {
            heading: "Changes to Terms",
            intro: Some("These terms and conditions may be updated periodically. Users are responsible for reviewing them regularly. Continued use of the chatbot constitutes acceptance of the updated terms."),
            items: &[],
        },
        Section {
            heading: "Governing Law",
            intro: Some("These terms are governed by the laws of [Your Country/State]. Any disputes arising from these terms will be resolved under the applicable jurisdiction."),
            items: &[],
        },
    ],
    contact: "For any questions, concerns, or feedback regarding these Terms and Conditions, please contact us at:",
};

#[component]
fn LegalDocument(document: &'static Document) -> impl IntoView {
    let sections = document
        .sections
        .iter()
        .map(|section| {
            let items = (!section.items.is_empty()).then(|| {
                view! {
                    <ul class="list-disc pl-6 space-y-1">
                        {section
                            .items
                            .iter()
                            .map(|(label, text)| {
                                let label = (!label.is_empty())
                                    .then(|| view! { <strong>{*label}": "</strong> });
                                view! { <li>{label}{*text}</li> }
                            })
                            .collect_view()}
                    </ul>
                }
            });
            view! {
                <section class="space-y-2">
                    <h2 class="text-2xl font-bold text-fg">{section.heading}</h2>
                    {section.intro.map(|intro| view! { <p>{intro}</p> })}
                    {items}
                </section>
            }
        })
        .collect_view();

    view! {
        <Layout>
            <div class="px-6 py-12 max-w-4xl mx-auto">
                <div class="bg-surface-elevated p-8 rounded-lg shadow-lg space-y-6 text-fg-muted">
                    <h1 class="text-4xl font-extrabold text-fg mb-6">{document.title}</h1>
                    <p class="text-lg">{document.lead}</p>
                    {sections}
                    <section class="space-y-2">
                        <h2 class="text-2xl font-bold text-fg">"Contact Us"</h2>
                        <p>{document.contact}</p>
                        <p>
                            <a href=format!("mailto:{}", CONTACT_EMAIL) class="underline">{CONTACT_EMAIL}</a>
                        </p>
                    </section>
                    <div class="mt-10 text-center">
                        <a
                            href="/"
                            class="inline-block font-bold py-3 px-6 rounded-md bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                        >
                            "← Back to Home"
                        </a>
                    </div>
                </div>
            </div>
        </Layout>
    }
}

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! { <LegalDocument document=&PRIVACY_POLICY /> }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <LegalDocument document=&TERMS /> }
}
