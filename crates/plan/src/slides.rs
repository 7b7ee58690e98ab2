//! One function per slide, in deck order.

use crate::palette::{AMBER, CYAN, GREEN, LIGHT, MUTED, PURPLE, RED, WHITE};
use deck_core::builder::column_x;
use deck_core::{inches, Deck, Frame, Rgb, Slide, TextStyle};

/// A titled card: heading, accent color, and item lines.
type Card<'a> = (&'a str, Rgb, &'a [&'a str]);

/// Slide heading at the top left, with an optional purple subtitle below it.
fn header(slide: &mut Slide, title: &str, subtitle: Option<&str>) {
    slide.add_text(
        Frame::inches(0.8, 0.5, 11.0, 0.6),
        title,
        TextStyle::sized(36.0).color(WHITE).bold(),
    );
    if let Some(subtitle) = subtitle {
        slide.add_text(
            Frame::inches(0.8, 1.2, 11.0, 0.3),
            subtitle,
            TextStyle::sized(16.0).color(PURPLE),
        );
    }
}

/// Lay cards out left to right starting at `start`, `pitch` inches apart.
fn card_row(slide: &mut Slide, start: f64, pitch: f64, size: (f64, f64), cards: &[Card<'_>]) {
    let (width, height) = size;
    for (i, &(title, accent, items)) in cards.iter().enumerate() {
        let frame = Frame::new(column_x(start, pitch, i), inches(1.8), inches(width), inches(height));
        slide.add_card(frame, title, items, accent);
    }
}

pub(crate) fn title(deck: &mut Deck) {
    let s = deck.add_slide();
    let centered = |size: f64, color: Rgb| TextStyle::sized(size).color(color).centered();
    s.add_text(
        Frame::inches(1.0, 1.5, 11.0, 1.0),
        "🤝 BRAND AMBASSADOR PROGRAM",
        centered(20.0, PURPLE).bold(),
    );
    s.add_text(
        Frame::inches(1.0, 2.2, 11.0, 1.5),
        "Business Development Plan",
        centered(48.0, WHITE).bold(),
    );
    s.add_text(
        Frame::inches(1.0, 3.8, 11.0, 0.8),
        "Turn your best users into growth engines",
        centered(24.0, MUTED),
    );
    s.add_text(
        Frame::inches(1.0, 5.5, 11.0, 0.5),
        "GigLift  •  February 2026",
        centered(16.0, MUTED),
    );
}

pub(crate) fn agenda(deck: &mut Deck) {
    let s = deck.add_slide();
    header(s, "Agenda", Some("What this plan covers"));

    let style = TextStyle::sized(20.0).color(LIGHT);
    s.add_bullet_list(
        Frame::inches(0.8, 1.9, 5.5, 4.5),
        &[
            "01   Executive Summary",
            "02   Ambassador Tiers",
            "03   Ambassador Types",
            "04   Referral & Tracking System",
            "05   Recruitment Strategy",
            "06   Content Playbook",
        ],
        style.clone(),
    );
    s.add_bullet_list(
        Frame::inches(6.8, 1.9, 5.5, 4.5),
        &[
            "07   Incentives & Gamification",
            "08   Year 1 Budget",
            "09   ROI Projection",
            "10   12-Month Launch Timeline",
            "11   Next Steps",
            "12   Closing",
        ],
        style,
    );
}

pub(crate) fn executive_summary(deck: &mut Deck) {
    let s = deck.add_slide();
    header(s, "Executive Summary", Some("A scalable, low-CAC growth engine"));
    s.add_text(
        Frame::inches(0.8, 1.8, 11.0, 1.5),
        "GigLift's Brand Ambassador Program transforms our most engaged users — working DJs, bands, solo artists, and music teachers — into advocates who drive organic sign-ups in exchange for free product access, revenue share, and exclusive perks.",
        TextStyle::sized(18.0).color(LIGHT),
    );
    s.add_text(
        Frame::inches(0.8, 3.2, 11.0, 1.5),
        "Ambassadors promote GigLift within their local music scenes, online communities, and professional networks, creating word-of-mouth growth that scales organically across metro areas.",
        TextStyle::sized(18.0).color(LIGHT),
    );

    let figures = [
        ("500", "Ambassadors (Yr 1)"),
        ("12,500", "Referred Sign-ups"),
        ("$660K", "Revenue Potential"),
    ];
    for (i, (number, label)) in figures.iter().enumerate() {
        let x = column_x(1.5, 3.8, i);
        s.add_text(
            Frame::new(x, inches(4.8), inches(3.0), inches(0.7)),
            *number,
            TextStyle::sized(42.0).color(PURPLE).bold().centered(),
        );
        s.add_text(
            Frame::new(x, inches(5.5), inches(3.0), inches(0.4)),
            *label,
            TextStyle::sized(14.0).color(MUTED).centered(),
        );
    }
}

pub(crate) fn ambassador_tiers(deck: &mut Deck) {
    let s = deck.add_slide();
    header(s, "Ambassador Tiers", Some("Three levels of engagement and reward"));
    card_row(
        s,
        0.8,
        4.0,
        (3.6, 4.5),
        &[
            (
                "🥉 Starter",
                AMBER,
                &[
                    "3+ referral sign-ups",
                    "Free Pro plan ($19/mo value)",
                    "Custom referral link",
                    "Ambassador badge on EPK",
                ],
            ),
            (
                "🥈 Rising",
                CYAN,
                &[
                    "10+ sign-ups, 1 post/week",
                    "Free Unlimited ($39/mo)",
                    "$5 per paid referral",
                    "Early feature access",
                    "Co-branded social content",
                ],
            ),
            (
                "🥇 Elite",
                PURPLE,
                &[
                    "25+ sign-ups, 2 posts/week",
                    "Free Unlimited + $10/referral",
                    "15% rev share on referrals",
                    "Featured on landing page",
                    "Product advisory input",
                ],
            ),
        ],
    );
}

pub(crate) fn ambassador_types(deck: &mut Deck) {
    let s = deck.add_slide();
    header(
        s,
        "Ambassador Types",
        Some("Four distinct ambassador profiles for maximum reach"),
    );
    card_row(
        s,
        0.5,
        3.1,
        (2.9, 3.5),
        &[
            (
                "🎵 Scene Leaders",
                PURPLE,
                &[
                    "DJs/musicians with 1K+ following",
                    "Instagram, TikTok, local groups",
                    "Target: Performers in their area",
                ],
            ),
            (
                "📚 Music Educators",
                CYAN,
                &[
                    "Teachers with school networks",
                    "Facebook groups, teacher forums",
                    "Target: Music instructors",
                ],
            ),
            (
                "🎬 Content Creators",
                GREEN,
                &[
                    "YouTube/TikTok music creators",
                    "Tutorials, demo videos",
                    "Target: Musicians nationwide",
                ],
            ),
            (
                "🏢 Venue Insiders",
                AMBER,
                &[
                    "Bookers, promoters, managers",
                    "Direct referrals, events",
                    "Target: Artists they work with",
                ],
            ),
        ],
    );
}

pub(crate) fn referral_tracking(deck: &mut Deck) {
    let s = deck.add_slide();
    header(
        s,
        "Referral & Tracking System",
        Some("End-to-end referral attribution and automated payouts"),
    );
    card_row(
        s,
        0.8,
        6.0,
        (5.5, 4.5),
        &[
            (
                "Technical Implementation",
                CYAN,
                &[
                    "Custom referral links: /sign-up?ref=CODE",
                    "Real-time ambassador dashboard",
                    "90-day cookie attribution window",
                    "Stripe Connect automated payouts",
                    "Fraud detection & flagging",
                ],
            ),
            (
                "Key Metrics Tracked",
                PURPLE,
                &[
                    "Referral sign-ups (free accounts created)",
                    "Conversion rate (% upgraded to paid)",
                    "MRR generated per ambassador",
                    "Content output (posts/month)",
                    "Retention rate (90-day referred user %)",
                ],
            ),
        ],
    );
}

pub(crate) fn recruitment_strategy(deck: &mut Deck) {
    let s = deck.add_slide();
    header(
        s,
        "Recruitment Strategy",
        Some("Three phases from seed to community"),
    );

    // The phase window leads each card, followed by a blank row.
    card_row(
        s,
        0.6,
        4.1,
        (3.8, 4.5),
        &[
            (
                "Phase 1: Seed",
                AMBER,
                &[
                    "Month 1-2  •  20 Ambassadors",
                    "",
                    "Identify top 50 active users",
                    "Personalized email invites",
                    "Post in DJ/music forums",
                    "Partner with 5 music schools",
                ],
            ),
            (
                "Phase 2: Scale",
                CYAN,
                &[
                    "Month 3-6  •  100 Ambassadors",
                    "",
                    "Public application page",
                    "Ambassador referral chain",
                    "Convention presence (DJ Expo)",
                    "10 influencer partnerships",
                ],
            ),
            (
                "Phase 3: Community",
                PURPLE,
                &[
                    "Month 6-12  •  500 Ambassadors",
                    "",
                    "Private Discord/Slack",
                    "Regional captain program",
                    "Annual ambassador summit",
                    "Self-sustaining growth",
                ],
            ),
        ],
    );
}

pub(crate) fn content_playbook(deck: &mut Deck) {
    let s = deck.add_slide();
    header(s, "Content Playbook", Some("Monthly content kits and weekly themes"));

    s.add_card(
        Frame::inches(0.8, 1.8, 5.5, 2.5),
        "Monthly Content Kit",
        &[
            "3 social post templates (carousel, story, reel)",
            "1 demo video script",
            "Branded graphics & stickers",
            "Key talking points for the month",
        ],
        CYAN,
    );

    let weeks = [
        ("Week 1", "Lead Discovery", "\"Found 47 new venues in one click 🔍\""),
        ("Week 2", "Outreach Results", "\"Sent 15 emails in 5 min, got 3 replies ✉️\""),
        ("Week 3", "Mode Switcher", "\"Teacher Mode found 12 schools 📚\""),
        ("Week 4", "Social Proof", "\"Booked 2 gigs from GigLift leads 🎵\""),
    ];
    let mut y = inches(4.6);
    for (week, theme, example) in weeks {
        s.add_text(
            Frame::new(inches(0.8), y, inches(1.5), inches(0.3)),
            week,
            TextStyle::sized(13.0).color(PURPLE).bold(),
        );
        s.add_text(
            Frame::new(inches(2.3), y, inches(2.0), inches(0.3)),
            theme,
            TextStyle::sized(13.0).color(WHITE).bold(),
        );
        s.add_text(
            Frame::new(inches(4.5), y, inches(8.0), inches(0.3)),
            example,
            TextStyle::sized(12.0).color(MUTED),
        );
        y = y + inches(0.35);
    }

    s.add_card(
        Frame::inches(6.8, 1.8, 5.5, 2.5),
        "Platform Strategy",
        &[
            "Instagram: Reels & Stories (3x/week)",
            "TikTok: Short demos (2x/week)",
            "YouTube: Deep-dive tutorials (2x/month)",
            "Facebook: Teacher communities (3x/week)",
            "Reddit: Value-add comments (as needed)",
        ],
        PURPLE,
    );
}

pub(crate) fn incentives(deck: &mut Deck) {
    let s = deck.add_slide();
    header(
        s,
        "Incentives & Gamification",
        Some("Monthly challenges and milestone rewards keep ambassadors engaged"),
    );
    card_row(
        s,
        0.8,
        6.0,
        (5.5, 4.5),
        &[
            (
                "Monthly Challenges",
                CYAN,
                &[
                    "Most sign-ups: $100 / $50 / $25 gift cards",
                    "Best content (community vote): Homepage feature",
                    "First to 50 referrals: Custom merch box",
                    "Best conversion rate: Strategy call with founders",
                ],
            ),
            (
                "Milestone Rewards",
                PURPLE,
                &[
                    "10 sign-ups → Sticker pack + social shoutout",
                    "25 sign-ups → T-shirt + priority support",
                    "50 sign-ups → Hoodie + lifetime Pro access",
                    "100 sign-ups → Merch bundle + equity pool + advisory seat",
                ],
            ),
        ],
    );
}

pub(crate) fn budget(deck: &mut Deck) {
    let s = deck.add_slide();
    header(s, "Year 1 Budget", Some("Estimated $71K annual investment"));

    let columns = [(0.8, 5.0), (6.0, 2.0), (8.0, 2.0)];
    let row = |s: &mut Slide, y, height, cells: [&str; 3], styles: [TextStyle; 3]| {
        for (((x, width), text), style) in columns.iter().zip(cells).zip(styles) {
            s.add_text(Frame::new(inches(*x), y, inches(*width), height), text, style);
        }
    };

    let heading = TextStyle::sized(12.0).color(MUTED).bold();
    row(
        s,
        inches(1.8),
        inches(0.35),
        ["LINE ITEM", "MONTHLY", "ANNUAL"],
        [heading.clone(), heading.clone(), heading],
    );

    let items = [
        ("Free plans (100 ambassadors)", "$2,900/mo", "$34,800"),
        ("Referral payouts", "$1,500/mo", "$18,000"),
        ("Content kits & design", "$500/mo", "$6,000"),
        ("Challenge prizes", "$200/mo", "$2,400"),
        ("Merch & milestones", "$300/mo", "$3,600"),
        ("Convention presence", "$400/mo", "$4,800"),
        ("Community tools", "$100/mo", "$1,200"),
    ];
    let mut y = inches(2.2);
    for (item, monthly, annual) in items {
        row(
            s,
            y,
            inches(0.3),
            [item, monthly, annual],
            [
                TextStyle::sized(15.0).color(LIGHT),
                TextStyle::sized(15.0).color(WHITE),
                TextStyle::sized(15.0).color(WHITE).bold(),
            ],
        );
        y = y + inches(0.38);
    }

    // Totals are stated, not summed from the rows above.
    let total = TextStyle::sized(16.0).color(PURPLE).bold();
    row(
        s,
        y + inches(0.1),
        inches(0.35),
        ["TOTAL", "$5,900/mo", "$70,800"],
        [total.clone(), total.clone(), total],
    );
}

pub(crate) fn roi_projection(deck: &mut Deck) {
    let s = deck.add_slide();
    header(
        s,
        "ROI Projection",
        Some("Three scenarios: conservative, moderate, aggressive"),
    );
    card_row(
        s,
        0.6,
        4.1,
        (3.8, 4.5),
        &[
            (
                "Conservative",
                RED,
                &[
                    "50 ambassadors",
                    "8 referrals each → 400 total",
                    "10% conversion → 40 paid users",
                    "$10,560 annual revenue",
                    "ROI: -85%",
                ],
            ),
            (
                "Moderate",
                AMBER,
                &[
                    "150 ambassadors",
                    "15 referrals each → 2,250 total",
                    "15% conversion → 338 paid users",
                    "$89,232 annual revenue",
                    "ROI: +26%",
                ],
            ),
            (
                "Aggressive",
                GREEN,
                &[
                    "500 ambassadors",
                    "25 referrals each → 12,500 total",
                    "20% conversion → 2,500 paid users",
                    "$660,000 annual revenue",
                    "ROI: +833%",
                ],
            ),
        ],
    );
}

pub(crate) fn launch_timeline(deck: &mut Deck) {
    let s = deck.add_slide();
    header(s, "12-Month Launch Timeline", None);

    let milestones = [
        ("Mar 2026", "Build referral tracking, recruit 20 seed ambassadors", AMBER),
        ("Apr 2026", "Launch ambassador dashboard, first content kit", AMBER),
        ("May 2026", "Public application page, first monthly challenge", CYAN),
        ("Jun 2026", "DJ Expo presence, launch ambassador Discord", CYAN),
        ("Jul-Aug 2026", "Influencer partnerships (10), reach 100 ambassadors", CYAN),
        ("Sep 2026", "Regional captain program launches", PURPLE),
        ("Oct-Nov 2026", "Annual summit planning, self-sustaining community", PURPLE),
        ("Dec 2026", "Hit 500 ambassadors target 🎯", PURPLE),
    ];
    let mut y = inches(1.5);
    for (date, description, color) in milestones {
        s.add_text(
            Frame::new(inches(0.8), y, inches(2.5), inches(0.35)),
            date,
            TextStyle::sized(15.0).color(color).bold(),
        );
        s.add_text(
            Frame::new(inches(3.5), y, inches(9.0), inches(0.35)),
            description,
            TextStyle::sized(15.0).color(LIGHT),
        );
        y = y + inches(0.55);
    }
}

pub(crate) fn next_steps(deck: &mut Deck) {
    let s = deck.add_slide();
    header(
        s,
        "Next Steps",
        Some("Immediate action items to launch the program"),
    );

    let steps = [
        ("1", "Build referral tracking", "Add ?ref= param handling to sign-up, store in user metadata"),
        ("2", "Create /ambassadors page", "Landing page with application form, program details, tier breakdown"),
        ("3", "Draft ambassador agreement", "Terms, brand guidelines, FTC compliance, payout schedule"),
        ("4", "Design first content kit", "March 2026 social templates, demo video scripts, branded graphics"),
        ("5", "Identify seed candidates", "Pull top 50 users by scan count, leads generated, outreach sent"),
        ("6", "Set up Stripe Connect", "Automated monthly ambassador payout infrastructure"),
    ];
    let mut y = inches(1.8);
    for (number, title, description) in steps {
        s.add_text(
            Frame::new(inches(0.8), y, inches(0.6), inches(0.5)),
            number,
            TextStyle::sized(28.0).color(PURPLE).bold(),
        );
        s.add_text(
            Frame::new(inches(1.5), y, inches(4.0), inches(0.35)),
            title,
            TextStyle::sized(18.0).color(WHITE).bold(),
        );
        s.add_text(
            Frame::new(inches(1.5), y + inches(0.35), inches(10.0), inches(0.3)),
            description,
            TextStyle::sized(14.0).color(MUTED),
        );
        y = y + inches(0.78);
    }
}

pub(crate) fn closing(deck: &mut Deck) {
    let s = deck.add_slide();
    let centered = |size: f64, color: Rgb| TextStyle::sized(size).color(color).centered();
    s.add_text(
        Frame::inches(1.0, 2.0, 11.0, 1.0),
        "GigLift",
        centered(64.0, WHITE).bold(),
    );
    s.add_text(
        Frame::inches(1.0, 3.2, 11.0, 0.8),
        "Brand Ambassador Program",
        centered(28.0, PURPLE),
    );
    s.add_text(
        Frame::inches(1.0, 4.2, 11.0, 0.5),
        "Turn your best users into your best growth engine.",
        centered(20.0, MUTED),
    );
    s.add_text(
        Frame::inches(1.0, 5.5, 11.0, 0.5),
        "giglift.vercel.app",
        centered(16.0, CYAN),
    );
}
