//! Static bilingual content catalog.
//!
//! Every string the site renders, keyed by [`Language`]. Bundles are built
//! once per process and never mutated afterwards.

use std::sync::LazyLock;

use crate::types::{
    ChatContent, Content, ExpertiseIcon, ExpertiseItem, ExpertiseSection, FooterContent,
    HeroContent, JourneyMilestone, JourneySection, Language, NavContent, ProcessItem,
    ProcessSection, ProjectItem, ProjectLabels, ProjectsSection,
};

static EN_CONTENT: LazyLock<Content> = LazyLock::new(english);
static ES_CONTENT: LazyLock<Content> = LazyLock::new(spanish);

/// The content bundle for `language`.
pub fn catalog(language: Language) -> &'static Content {
    match language {
        Language::En => &*EN_CONTENT,
        Language::Es => &*ES_CONTENT,
    }
}

fn s(text: &str) -> String {
    text.to_string()
}

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|i| i.to_string()).collect()
}

// Shared across languages.
const MILESTONE_IMAGES: [&str; 5] = [
    "https://images.unsplash.com/photo-1555066931-4365d14bab8c?q=80&w=2070&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1558494949-ef526b0042a0?q=80&w=2070&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=2070&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1451187580459-43490279c0fa?q=80&w=2072&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1518770660439-4636190af475?q=80&w=2070&auto=format&fit=crop",
];

fn project_images(ids: [u32; 3]) -> Vec<String> {
    ids.iter()
        .map(|id| format!("https://picsum.photos/id/{}/800/600", id))
        .collect()
}

fn expertise_items(descriptions: [(&str, &str); 3]) -> Vec<ExpertiseItem> {
    let fixed = [
        (
            "arch",
            ["Micro-frontends", "Monorepos", "State Machines"],
            ExpertiseIcon::Architecture,
        ),
        (
            "perf",
            ["Tree-shaking", "Web Workers", "WASM"],
            ExpertiseIcon::Performance,
        ),
        (
            "int",
            ["GraphQL", "WebSockets", "Serverless Functions"],
            ExpertiseIcon::Integration,
        ),
    ];

    fixed
        .into_iter()
        .zip(descriptions)
        .map(|((id, tech, icon), (title, description))| ExpertiseItem {
            id: s(id),
            title: s(title),
            description: s(description),
            tech_list: list(&tech),
            icon,
        })
        .collect()
}

fn milestones(entries: [(&str, &str, &str); 5]) -> Vec<JourneyMilestone> {
    entries
        .into_iter()
        .zip(MILESTONE_IMAGES)
        .enumerate()
        .map(|(idx, ((year, title, description), image))| JourneyMilestone {
            id: idx as u32 + 1,
            year: s(year),
            title: s(title),
            description: s(description),
            image: s(image),
        })
        .collect()
}

fn english() -> Content {
    Content {
        nav: NavContent {
            home: s("Home"),
            expertise: s("Capabilities"),
            projects: s("Engineering"),
            journey: s("Evolution"),
            contact: s("Contact"),
        },
        hero: HeroContent {
            greeting: s("Hi, I'm Javier."),
            role: s("Architect of Ideas."),
            description: s("Behind every great idea lies robust code. I am a Full Stack Developer specialized in designing and coding high-performance solutions, from the database to the user interface."),
            cta_explore: s("Explore Work"),
            cta_contact: s("Get in Touch"),
        },
        expertise: ExpertiseSection {
            title: s("Technical Expertise"),
            subtitle: s("Core competencies in modern software engineering and system architecture."),
            items: expertise_items([
                ("Scalable Architecture", "Designing modular, component-driven architectures that sustain long-term growth. I enforce clean code principles and atomic design systems to ensure maintainability."),
                ("Performance Engineering", "Deep-dive optimization for Core Web Vitals. I focus on critical rendering paths, bundle analysis, and memory management for complex applications."),
                ("Complex Integrations", "Seamlessly connecting front-end interfaces with headless CMS, graph databases, and real-time backend services."),
            ]),
        },
        process: ProcessSection {
            title: s("Engineering Workflow"),
            items: vec![
                ProcessItem {
                    step: s("01"),
                    title: s("Technical Discovery"),
                    description: s("Analyzing system requirements, data modeling, and selecting the optimal stack for the problem domain."),
                },
                ProcessItem {
                    step: s("02"),
                    title: s("Architecture & Design"),
                    description: s("Drafting API contracts, component hierarchies, and CI/CD pipelines before coding begins."),
                },
                ProcessItem {
                    step: s("03"),
                    title: s("Agile Implementation"),
                    description: s("Iterative development with strict code reviews, automated testing, and continuous integration."),
                },
                ProcessItem {
                    step: s("04"),
                    title: s("Deployment & Scale"),
                    description: s("Infrastructure setup, load testing, and observability configuration for production readiness."),
                },
            ],
        },
        journey: JourneySection {
            title: s("The Evolution"),
            milestones: milestones([
                ("The Origin", "Algorithmic Foundations", "It started with the raw logic of C++ and Python. Understanding data structures, memory management, and Big O notation gave me a permanent appreciation for efficiency before I ever touched a DOM element."),
                ("The Expansion", "Full Stack Development", "I bridged the gap between server and client, mastering Node.js and SQL. This era was defined by building complete CRUD applications and understanding the lifecycle of a request from database to pixel."),
                ("The Refinement", "Frontend Architecture", "As apps grew complex, I pivoted to structural UI design. I dove deep into React internals, state machines, and component patterns to tame chaos in large-scale interfaces."),
                ("The Scale", "Cloud & DevOps", "Code doesn't live in a vacuum. I integrated Docker, Kubernetes, and CI/CD pipelines into my workflow, ensuring that the architectures I designed were deployable, scalable, and resilient."),
                ("The Present", "Technical Leadership", "Now, I build the systems that build systems. My focus is on high-level decision making, mentoring teams, and integrating AI to accelerate engineering workflows."),
            ]),
        },
        projects: ProjectsSection {
            title: s("Case Studies"),
            view_case_study: s("View Architecture"),
            labels: ProjectLabels {
                problem: s("The Problem"),
                architecture: s("Architecture & Decisions"),
                highlights: s("Technical Highlights"),
                outcome: s("Business Outcome"),
                stack: s("Tech Stack"),
            },
            items: vec![
                ProjectItem {
                    id: 101,
                    title: s("Ethereal Finance"),
                    short_desc: s("High-frequency trading dashboard with WebGL visualization."),
                    link: String::new(),
                    repo: String::new(),
                    problem: s("The client needed to visualize real-time asset flows for thousands of transactions simultaneously. DOM-based rendering was causing main-thread blocking and frame drops on low-end devices."),
                    architecture: s("We bypassed the DOM for the data layer, utilizing Three.js (WebGL) for rendering data points. State was managed via a custom RxJS stream to handle high-frequency updates without triggering React reconciliations unnecessarily."),
                    highlights: list(&[
                        "Implemented instanced mesh rendering to handle 10k+ particles at 60fps.",
                        "Decoupled data ingestion from the UI thread using Web Workers.",
                        "Reduced initial load time by 40% via route-based code splitting.",
                    ]),
                    outcome: s("Delivered a trading tool that outperformed competitors in speed, leading to a 45% increase in user session duration."),
                    stack: list(&["React", "Three.js", "RxJS", "Web Workers"]),
                    images: project_images([1, 2, 3]),
                },
                ProjectItem {
                    id: 102,
                    title: s("Neon Nexus"),
                    short_desc: s("Decentralized marketplace with real-time bidding engine."),
                    link: String::new(),
                    repo: String::new(),
                    problem: s("The platform required absolute data consistency for live auctions across global users. Standard polling was too slow, and managing WebSocket connections across a micro-frontend architecture was creating race conditions."),
                    architecture: s("Adopted a centralized WebSocket manager within the core shell application. We used a normalized Redux store to act as the single source of truth, synchronizing optimistic UI updates with eventual consistency from the blockchain."),
                    highlights: list(&[
                        "Custom WebSocket hook with automatic reconnection and message queueing.",
                        "Optimistic UI updates to mask blockchain transaction latency.",
                        "Smart contract integration using Ethers.js with type-safe ABIs.",
                    ]),
                    outcome: s("Zero downtime during peak auction events with over $2M processed volume in the first month."),
                    stack: list(&["Next.js", "Redux Toolkit", "Socket.io", "Solidity"]),
                    images: project_images([20, 26, 48]),
                },
                ProjectItem {
                    id: 103,
                    title: s("Gaia's Voice"),
                    short_desc: s("Edge-computed narrative engine for environmental data."),
                    link: String::new(),
                    repo: String::new(),
                    problem: s("Generating personalized narratives based on user location and weather data introduced significant latency when processed on a traditional centralized server."),
                    architecture: s("Moved the logic to the Edge. We utilized Vercel Edge Functions to aggregate weather and location APIs closer to the user, then streamed the OpenAI response to the client to improve Perceived Performance."),
                    highlights: list(&[
                        "Implemented Edge Caching strategies for static assets and API responses.",
                        "Streaming HTML response for immediate Time-To-First-Byte (TTFB).",
                        "Graceful degradation strategies for third-party API failures.",
                    ]),
                    outcome: s("Achieved a Lighthouse Performance score of 98/100 despite heavy AI processing."),
                    stack: list(&["React", "Vercel Edge", "OpenAI", "Redis"]),
                    images: project_images([10, 15, 18]),
                },
            ],
        },
        chat: ChatContent {
            title: s("Virtual Tech Lead"),
            welcome: s("I am the Virtual Tech Lead. Ask me about the system architecture, tech stack decisions, or development methodologies."),
            placeholder: s("Ask about architecture, stacks..."),
            thinking: s("Analyzing request..."),
            connection_error: s("I'm having connection trouble. Could you try again?"),
        },
        footer: FooterContent {
            cta_title: s("Need Robust Engineering?"),
            cta_description: s("I provide architectural leadership and high-end development for complex digital products."),
            rights: s("Lumina. Engineering Showcase."),
        },
    }
}

fn spanish() -> Content {
    Content {
        nav: NavContent {
            home: s("Inicio"),
            expertise: s("Capacidades"),
            projects: s("Ingeniería"),
            journey: s("Evolución"),
            contact: s("Contacto"),
        },
        hero: HeroContent {
            greeting: s("Hola, soy Javier."),
            role: s("Arquitecto de Ideas."),
            description: s("Detrás de cada gran idea, existe un código robusto. Soy Desarrollador Full Stack especializado en diseñar y programar soluciones de alto rendimiento, desde la base de datos hasta la interfaz de usuario."),
            cta_explore: s("Mis proyectos"),
            cta_contact: s("Contactar"),
        },
        expertise: ExpertiseSection {
            title: s("Expertise Técnico"),
            subtitle: s("Competencias clave en ingeniería de software moderna y arquitectura de sistemas."),
            items: expertise_items([
                ("Arquitectura Escalable", "Diseño de arquitecturas modulares que sostienen el crecimiento a largo plazo. Aplico principios de código limpio y sistemas de diseño atómicos."),
                ("Ingeniería de Rendimiento", "Optimización profunda de Core Web Vitals. Me enfoco en rutas críticas de renderizado, análisis de bundles y gestión de memoria."),
                ("Integraciones Complejas", "Conexión fluida de interfaces frontend con CMS headless, bases de datos de grafos y servicios backend en tiempo real."),
            ]),
        },
        process: ProcessSection {
            title: s("Workflow de Ingeniería"),
            items: vec![
                ProcessItem {
                    step: s("01"),
                    title: s("Descubrimiento Técnico"),
                    description: s("Análisis de requerimientos del sistema, modelado de datos y selección del stack óptimo."),
                },
                ProcessItem {
                    step: s("02"),
                    title: s("Arquitectura y Diseño"),
                    description: s("Definición de contratos API, jerarquías de componentes y pipelines CI/CD antes de codificar."),
                },
                ProcessItem {
                    step: s("03"),
                    title: s("Implementación Ágil"),
                    description: s("Desarrollo iterativo con revisiones de código estrictas, pruebas automatizadas e integración continua."),
                },
                ProcessItem {
                    step: s("04"),
                    title: s("Despliegue y Escala"),
                    description: s("Configuración de infraestructura, pruebas de carga y observabilidad para producción."),
                },
            ],
        },
        journey: JourneySection {
            title: s("La Evolución"),
            milestones: milestones([
                ("El Origen", "Fundamentos Algorítmicos", "Comenzó con la lógica pura de C++ y Python. Entender estructuras de datos, gestión de memoria y notación Big O me dio una apreciación permanente por la eficiencia antes de tocar el DOM."),
                ("La Expansión", "Desarrollo Full Stack", "Cerré la brecha entre servidor y cliente, dominando Node.js y SQL. Esta era se definió por construir aplicaciones CRUD completas y entender el ciclo de vida de una petición."),
                ("El Refinamiento", "Arquitectura Frontend", "A medida que las apps crecían, pivoté al diseño UI estructural. Profundicé en los internos de React, máquinas de estado y patrones de componentes para domar el caos."),
                ("La Escala", "Cloud & DevOps", "El código no vive en el vacío. Integré Docker, Kubernetes y pipelines CI/CD, asegurando que las arquitecturas diseñadas fueran desplegables, escalables y resilientes."),
                ("El Presente", "Liderazgo Técnico", "Ahora construyo sistemas que construyen sistemas. Mi enfoque está en la toma de decisiones de alto nivel, mentoría de equipos e integración de IA para acelerar workflows."),
            ]),
        },
        projects: ProjectsSection {
            title: s("Casos de Estudio"),
            view_case_study: s("Ver Arquitectura"),
            labels: ProjectLabels {
                problem: s("El Problema"),
                architecture: s("Arquitectura y Decisiones"),
                highlights: s("Highlights Técnicos"),
                outcome: s("Impacto de Negocio"),
                stack: s("Tech Stack"),
            },
            items: vec![
                ProjectItem {
                    id: 101,
                    title: s("Ethereal Finance"),
                    short_desc: s("Dashboard de trading de alta frecuencia con visualización WebGL."),
                    link: String::new(),
                    repo: String::new(),
                    problem: s("El cliente necesitaba visualizar flujos de activos en tiempo real para miles de transacciones. El renderizado basado en DOM bloqueaba el hilo principal."),
                    architecture: s("Evitamos el DOM para la capa de datos, utilizando Three.js (WebGL). El estado se gestionó mediante un stream personalizado de RxJS para manejar actualizaciones de alta frecuencia sin reconciliaciones de React."),
                    highlights: list(&[
                        "Renderizado instanciado para manejar 10k+ partículas a 60fps.",
                        "Desacoplamiento de ingesta de datos usando Web Workers.",
                        "Reducción de carga inicial del 40% vía code-splitting.",
                    ]),
                    outcome: s("Herramienta de trading superior en velocidad, aumentando la sesión de usuario en un 45%."),
                    stack: list(&["React", "Three.js", "RxJS", "Web Workers"]),
                    images: project_images([1, 2, 3]),
                },
                ProjectItem {
                    id: 102,
                    title: s("Neon Nexus"),
                    short_desc: s("Marketplace descentralizado con motor de pujas en tiempo real."),
                    link: String::new(),
                    repo: String::new(),
                    problem: s("La plataforma requería consistencia de datos absoluta para subastas en vivo. El polling estándar era lento y las conexiones WebSocket en micro-frontends creaban condiciones de carrera."),
                    architecture: s("Adoptamos un gestor de WebSocket centralizado. Usamos un store de Redux normalizado como fuente única de verdad, sincronizando actualizaciones optimistas con la consistencia eventual del blockchain."),
                    highlights: list(&[
                        "Hook de WebSocket personalizado con reconexión automática.",
                        "Actualizaciones de UI optimistas para enmascarar latencia.",
                        "Integración de contratos inteligentes usando Ethers.js.",
                    ]),
                    outcome: s("Cero tiempo de inactividad durante subastas pico con más de $2M procesados en el primer mes."),
                    stack: list(&["Next.js", "Redux Toolkit", "Socket.io", "Solidity"]),
                    images: project_images([20, 26, 48]),
                },
                ProjectItem {
                    id: 103,
                    title: s("Gaia's Voice"),
                    short_desc: s("Motor narrativo computed-at-edge para datos ambientales."),
                    link: String::new(),
                    repo: String::new(),
                    problem: s("Generar narrativas personalizadas basadas en ubicación y clima introducía latencia significativa en servidores centralizados."),
                    architecture: s("Movimos la lógica al Edge. Utilizamos Vercel Edge Functions para agregar APIs cerca del usuario, y luego streaming de la respuesta de OpenAI para mejorar el Rendimiento Percibido."),
                    highlights: list(&[
                        "Estrategias de Edge Caching para assets y APIs.",
                        "Respuesta HTML en streaming para TTFB inmediato.",
                        "Estrategias de degradación elegante para fallos de API.",
                    ]),
                    outcome: s("Score de Performance Lighthouse de 98/100 a pesar del procesamiento pesado de IA."),
                    stack: list(&["React", "Vercel Edge", "OpenAI", "Redis"]),
                    images: project_images([10, 15, 18]),
                },
            ],
        },
        chat: ChatContent {
            title: s("Tech Lead Virtual"),
            welcome: s("Soy el Tech Lead Virtual. Pregúntame sobre la arquitectura del sistema, decisiones de stack o metodologías de desarrollo."),
            placeholder: s("Pregunta sobre arquitectura..."),
            thinking: s("Analizando..."),
            connection_error: s("Tengo problemas de conexión. ¿Intentas de nuevo?"),
        },
        footer: FooterContent {
            cta_title: s("¿Necesitas Ingeniería Robusta?"),
            cta_description: s("Proporciono liderazgo arquitectónico y desarrollo de alta gama para productos digitales complejos."),
            rights: s("Lumina. Engineering Showcase."),
        },
    }
}
