//! Static game text: scripted phrases and the built-in riddle sets.
//!
//! Everything the entity "says" lives here. The riddle content is data,
//! not logic; four themed sets of ten riddles each, one of which is chosen
//! per session.

use super::riddle::{Riddle, RiddleSet};

/// Shown on the intro screen.
pub const OPENING_PHRASE: &str =
    "No estás solo. Nunca lo has estado. ¿Crees que puedes escapar de lo que ya te ha visto?";

/// Pacing cue between feedback and the next riddle.
pub const ENTITY_THINKING_TEXT: &str = "La entidad está pensando...";

/// What the player "says" when asking for a hint.
pub const HINT_REQUEST_TEXT: &str = "Necesito una señal...";

/// Shown on the summary screen.
pub const CLOSING_PHRASE: &str = "La entidad ha terminado contigo.";

/// Feedback pool for correct answers; one entry is chosen at random.
pub const CORRECT_PHRASES: [&str; 5] = [
    "Correcto. Pero no te confíes.",
    "Bien. La entidad se apacigua... por ahora.",
    "Has visto la verdad.",
    "Acertaste. Sientes cómo te observa menos.",
    "Verdad aceptada.",
];

/// Feedback pool for incorrect answers; one entry is chosen at random.
pub const INCORRECT_PHRASES: [&str; 5] = [
    "Incorrecto. La oscuridad se ríe de ti.",
    "Te equivocas. Sientes una respiración en tu nuca.",
    "No es eso. La entidad se acerca.",
    "Error. Tu miedo alimenta su hambre.",
    "Falso. Estás perdiendo tiempo de vida.",
];

/// The entity's greeting once registration completes.
pub fn welcome_line(name: &str) -> String {
    format!("Bienvenida/o al vacío, {}. Comenzamos.", name)
}

fn riddle(id: u32, question: &str, keywords: &[&str], hint: &str) -> Riddle {
    Riddle {
        id,
        question: question.to_string(),
        answer_keywords: keywords.iter().map(|k| k.to_string()).collect(),
        hint: Some(hint.to_string()),
    }
}

/// The four built-in riddle sets.
pub(crate) fn builtin_sets() -> Vec<RiddleSet> {
    vec![
        sombras_y_reflejos(),
        tiempo_y_locura(),
        cuerpo_y_sentidos(),
        vacio_y_desconocido(),
    ]
}

fn sombras_y_reflejos() -> RiddleSet {
    RiddleSet {
        theme: "Sombras y Reflejos".to_string(),
        riddles: vec![
            riddle(
                1,
                "Estoy contigo todo el día, pero desaparezco cuando el sol se oculta o cuando la luz es total. Si me miras, no tengo rostro. ¿Qué soy?",
                &["sombra", "la sombra", "sombras"],
                "Soy tu compañera oscura pegada a tus pies.",
            ),
            riddle(
                2,
                "Tengo ojos pero no veo, tengo boca pero no hablo, y aunque no estoy vivo, puedo mostrarte tu propia muerte. ¿Qué soy?",
                &["calavera", "craneo", "cráneo", "muerte", "reflejo", "espejo"],
                "La sonrisa eterna bajo tu piel.",
            ),
            riddle(
                3,
                "Cuanto más hay de mí, menos ves. Soy el hogar de las criaturas que temes.",
                &["oscuridad", "la oscuridad", "noche", "tinieblas"],
                "Apaga la luz y ahí estaré.",
            ),
            riddle(
                4,
                "Muchos me han escuchado, pero nadie me ha visto. No camino, pero corro si tienes miedo. Soy el sonido de tu vida escapando.",
                &["latido", "corazon", "corazón", "sangre", "pulso"],
                "Bum... bum... bum... en tu pecho.",
            ),
            riddle(
                5,
                "Pertenezco al pasado, pero te persigo en el presente. Soy el error que cometiste y que la entidad no olvida.",
                &["culpa", "recuerdo", "memoria", "pecado", "remordimiento"],
                "Ese peso en tu conciencia que no te deja dormir.",
            ),
            riddle(
                6,
                "Todos lo tienen, algunos intentan ocultarlo. Es lo único que la entidad puede oler en ti ahora mismo.",
                &["miedo", "temor", "pánico", "terror"],
                "Lo que sientes al leer estas palabras.",
            ),
            riddle(
                7,
                "Rompo sin ser tocado. Lloro sin tener ojos. Vuelo sin tener alas. Y cuando llego, la luz se va.",
                &["noche", "silencio", "oscuridad", "tormenta"],
                "Oscurezco el cielo y traigo truenos.",
            ),
            riddle(
                8,
                "Puedes correr, pero siempre estoy delante de ti. Nunca me alcanzas, pero al final, siempre te atrapo.",
                &["futuro", "destino", "muerte", "final"],
                "El final inevitable de todo camino.",
            ),
            riddle(
                9,
                "No soy de carne, ni de hueso, pero si me nombras, me rompes.",
                &["silencio", "el silencio"],
                "Shhhh...",
            ),
            riddle(
                10,
                "¿Quién te ha estado observando desde que empezaste a leer esto?",
                &["tu", "la entidad", "entidad", "nadie", "libro", "tonatihu", "yo", "lo has visto"],
                "Mira detrás de ti. O en el título del libro.",
            ),
        ],
    }
}

fn tiempo_y_locura() -> RiddleSet {
    RiddleSet {
        theme: "Tiempo y Locura".to_string(),
        riddles: vec![
            riddle(
                1,
                "Devoro todo: pájaros, bestias, árboles y flores. Muerdo el hierro y roo el acero. Mato reyes y destruyo ciudades. ¿Qué soy?",
                &["tiempo", "el tiempo"],
                "Tic, tac. Se acaba.",
            ),
            riddle(
                2,
                "Solo existo cuando me nombras mal. Si me nombras bien, desaparezco porque soy una mentira.",
                &["secreto", "mentira", "silencio"],
                "Si lo cuentas, deja de serlo.",
            ),
            riddle(
                3,
                "Tengo ciudades, pero no casas. Montañas, pero no árboles. Agua, pero no peces. Soy el mapa de tu perdición.",
                &["mapa", "el mapa"],
                "Guía de papel plano.",
            ),
            riddle(
                4,
                "Nazco grande y muero pequeño. Alumbro tu miedo hasta que me consumo.",
                &["vela", "candelabro", "esperanza"],
                "Lloro cera mientras muero.",
            ),
            riddle(
                5,
                "No tengo vida, pero puedo morir. No tengo cuerpo, pero puedo ser herido. Soy lo que pierdes cuando te rindes.",
                &["esperanza", "fe", "voluntad"],
                "Lo último que quedó en la caja de Pandora.",
            ),
            riddle(
                6,
                "Camino sin pies, vuelo sin alas y lloro sin ojos. Soy el lamento de los olvidados.",
                &["viento", "nube", "alma"],
                "Muevo los árboles pero no me ves.",
            ),
            riddle(
                7,
                "Cuanto más quitas, más grande me hago. Soy el agujero donde caerás.",
                &["agujero", "hueco", "fosa", "tumba"],
                "Vacío en la tierra.",
            ),
            riddle(
                8,
                "Vengo de noche sin que me llamen, y me voy de día sin que me roben. Soy la visión que te atormenta.",
                &["estrella", "sueño", "pesadilla"],
                "Ocurre cuando cierras los ojos.",
            ),
            riddle(
                9,
                "Tengo llaves pero no abro cerraduras. Tengo espacio pero no habitaciones. Puedes entrar, pero nunca salir.",
                &["piano", "mente", "locura"],
                "Música negra y blanca, o tu propia cabeza.",
            ),
            riddle(
                10,
                "¿Qué es aquello que te pertenece, pero los demás lo usan más que tú?",
                &["nombre", "tu nombre", "vida"],
                "Te lo pusieron al nacer.",
            ),
        ],
    }
}

fn cuerpo_y_sentidos() -> RiddleSet {
    RiddleSet {
        theme: "El Cuerpo y los Sentidos".to_string(),
        riddles: vec![
            riddle(
                1,
                "Cinco hermanos muy unidos, que no se pueden mirar. Si uno se corta, los otros no sangran, pero todos dejan de agarrar.",
                &["dedos", "mano", "los dedos"],
                "Están al final de tus brazos.",
            ),
            riddle(
                2,
                "Una caja sin bisagras, llave o tapa, pero dentro hay un tesoro dorado... o un corazón podrido.",
                &["huevo", "alma", "cuerpo"],
                "Frágil cáscara blanca.",
            ),
            riddle(
                3,
                "Treinta y dos caballeros blancos en una colina roja. Primero mastican, luego golpean, y al final esperan.",
                &["dientes", "los dientes"],
                "Sonríe y los mostrarás.",
            ),
            riddle(
                4,
                "Soy rojo, soy vida, soy caliente. Si me derramo, te enfrías para siempre.",
                &["sangre", "la sangre"],
                "Corre por tus venas.",
            ),
            riddle(
                5,
                "Dos hermanas que ven todo, pero no se pueden ver entre ellas. Lloran juntas cuando estás triste.",
                &["ojos", "los ojos"],
                "Ventanas del alma.",
            ),
            riddle(
                6,
                "Crezco en la oscuridad, en lo profundo de tu mente. Soy la idea que no puedes sacar.",
                &["obsesion", "locura", "miedo"],
                "Pensamiento fijo.",
            ),
            riddle(
                7,
                "No tengo voz, pero grito cuando me rompes. Soy blanco y duro, lo último que queda de ti.",
                &["hueso", "esqueleto", "calavera"],
                "Tu estructura interna.",
            ),
            riddle(
                8,
                "Tengo cuello pero no cabeza. Tengo brazos pero no manos. Me pongo sobre ti.",
                &["camisa", "camisa de fuerza", "fuerza"],
                "Ropa que atrapa.",
            ),
            riddle(
                9,
                "Solo tengo un ojo y una cola larga. Atravieso todo lo que toco.",
                &["aguja", "la aguja"],
                "Pincha y cose.",
            ),
            riddle(
                10,
                "¿Qué baja pero nunca sube?",
                &["lluvia", "vida", "edad", "tiempo"],
                "Cae del cielo.",
            ),
        ],
    }
}

fn vacio_y_desconocido() -> RiddleSet {
    RiddleSet {
        theme: "El Vacío y lo Desconocido".to_string(),
        riddles: vec![
            riddle(
                1,
                "Soy el principio del fin, y el final del tiempo y el espacio. Estoy en medio de la nada.",
                &["letra n", "n", "nada"],
                "Fíjate en la palabra fiN.",
            ),
            riddle(
                2,
                "Doy vueltas y vueltas pero nunca me muevo. No tengo boca pero me trago todo.",
                &["remolino", "agujero negro", "vacio"],
                "Espiralo de agua o gravedad.",
            ),
            riddle(
                3,
                "Siempre estoy hambriento, debo ser alimentado. El dedo que me lame se quemará pronto.",
                &["fuego", "el fuego"],
                "Caliente y brillante.",
            ),
            riddle(
                4,
                "No se puede ver, no se puede sentir. No se puede oír, no se puede oler. Yace detrás de las estrellas y bajo las colinas.",
                &["oscuridad", "vacio", "nada"],
                "La ausencia de todo.",
            ),
            riddle(
                5,
                "Cuanto más seca, más mojada se pone. Absorbe tus lágrimas.",
                &["toalla", "tierra"],
                "Tela para secar.",
            ),
            riddle(
                6,
                "Tengo ríos pero no agua, bosques pero no árboles, ciudades pero no gente.",
                &["mapa", "mundo"],
                "Representación en papel.",
            ),
            riddle(
                7,
                "Si me tienes, quieres compartirme. Si me compartes, ya no me tienes.",
                &["secreto", "el secreto"],
                "Guárdalo bien.",
            ),
            riddle(
                8,
                "Soy ligero como una pluma, pero ni el hombre más fuerte puede sostenerme por mucho tiempo.",
                &["aliento", "respiracion", "aire"],
                "Aguanta la respiración...",
            ),
            riddle(
                9,
                "Vengo sin que me veas. Te envuelvo sin tocarte. Y cuando te das cuenta, ya estás dormido.",
                &["sueño", "muerte", "noche"],
                "Pequeña muerte nocturna.",
            ),
            riddle(
                10,
                "¿Quién es el único que puede sacarte de aquí?",
                &["yo", "nadie", "tu mismo", "entidad"],
                "Tú.",
            ),
        ],
    }
}
